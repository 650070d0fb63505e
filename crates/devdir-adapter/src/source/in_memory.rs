//! In-Memory EmployeeSource
//!
//! Serves a fixed list (or a fixed failure) without touching the network.
//! Useful for testing and development.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use devdir_domain::{Employee, FetchError};
use devdir_usecase::EmployeeSource;

/// In-memory employee source
///
/// Clones share the load counter, so a test can hand a clone to the code
/// under test and still observe how many times it loaded.
#[derive(Debug, Clone)]
pub struct InMemoryEmployeeSource {
    result: Result<Vec<Employee>, FetchError>,
    loads: Arc<AtomicUsize>,
}

impl InMemoryEmployeeSource {
    /// Source that always returns `employees`
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            result: Ok(employees),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source that always fails with `error`
    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many times `load` has been called
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeSource for InMemoryEmployeeSource {
    async fn load(&self) -> Result<Vec<Employee>, FetchError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
