//! FileEmployeeSource - Loads the directory from a local JSON file

use std::path::PathBuf;

use async_trait::async_trait;
use devdir_domain::{Employee, FetchError};
use devdir_usecase::EmployeeSource;

use crate::record::parse_employees_document;

/// Employee source reading a document saved on disk
#[derive(Debug, Clone)]
pub struct FileEmployeeSource {
    path: PathBuf,
}

impl FileEmployeeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EmployeeSource for FileEmployeeSource {
    async fn load(&self) -> Result<Vec<Employee>, FetchError> {
        // An unreadable file is the local equivalent of an unreachable host
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| FetchError::Network {
                message: format!("{}: {}", self.path.display(), e),
            })?;
        parse_employees_document(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
