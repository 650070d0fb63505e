//! HttpEmployeeSource - Loads the directory over HTTP

use std::sync::Arc;

use async_trait::async_trait;
use devdir_domain::{Employee, FetchError};
use devdir_usecase::EmployeeSource;

use crate::gateway::upstream::UpstreamClient;
use crate::record::parse_employees_document;

/// Employee source backed by an upstream JSON document
///
/// Point it at the remote file directly, or at a running proxy's
/// `/api/data` endpoint; both serve the same document.
#[derive(Debug, Clone)]
pub struct HttpEmployeeSource {
    upstream: Arc<UpstreamClient>,
}

impl HttpEmployeeSource {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self { upstream }
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn load(&self) -> Result<Vec<Employee>, FetchError> {
        let body = self.upstream.fetch_document().await?;
        parse_employees_document(&body)
    }

    fn describe(&self) -> String {
        self.upstream.url().to_string()
    }
}
