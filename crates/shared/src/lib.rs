//! # devdir Shared
//!
//! Configuration and error types used across all devdir packages.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
