//! # devdir Use Case Layer
//!
//! Application-specific business rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//!
//! - `port`    - What the use cases need from the outside world (EmployeeSource)
//! - `session` - One browsing session: load once, then filter and inspect

pub mod port;
pub mod session;

pub use devdir_domain;

pub use port::EmployeeSource;
pub use session::{DirectorySession, ProjectRef};
