//! EmployeeSource - The outbound port for loading the directory
//!
//! ```text
//! Use Case Layer        │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait EmployeeSource  │  HttpEmployeeSource
//!   async fn load()     │  InMemoryEmployeeSource
//! ```

use async_trait::async_trait;
use devdir_domain::{Employee, FetchError};

/// EmployeeSource Trait
///
/// Implementations return already-normalized records: every field the
/// upstream omitted or mistyped has been coerced to its empty value.
/// No caching, retry or pagination is expected of an implementation.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetch the `employees` array of the backing document
    async fn load(&self) -> Result<Vec<Employee>, FetchError>;

    /// Human-readable description for logs (URL, file path, ...)
    fn describe(&self) -> String {
        "employee source".to_string()
    }
}
