//! Outbound Adapters - Clients for systems we call

pub mod upstream;
