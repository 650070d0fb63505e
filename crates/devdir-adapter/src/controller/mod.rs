//! Inbound Adapters - How requests reach the directory

pub mod http;
