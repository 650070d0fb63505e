//! # devdir Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP proxy router)
//! - `gateway/`    - Outbound adapters (upstream document client)
//! - `source/`     - EmployeeSource implementations
//! - `record`      - JSON record shapes and lenient ingestion

pub mod controller;
pub mod gateway;
pub mod record;
pub mod source;

pub use controller::http::{build_router, run_server, AppState};
pub use gateway::upstream::UpstreamClient;
pub use record::{parse_employees_document, EmployeeRecord};
pub use source::{FileEmployeeSource, HttpEmployeeSource, InMemoryEmployeeSource};
