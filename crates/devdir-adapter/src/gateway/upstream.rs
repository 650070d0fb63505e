//! UpstreamClient - Fetches the remote employee document
//!
//! One GET, no retry, no caching. The body is checked to be JSON but
//! otherwise handed back byte-for-byte so the proxy can relay it verbatim.

use std::time::Duration;

use devdir_domain::FetchError;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::de::IgnoredAny;
use shared::DirectoryConfig;
use tracing::debug;

const CLIENT_USER_AGENT: &str = concat!("devdir/", env!("CARGO_PKG_VERSION"));

/// Client for the upstream JSON document
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    url: String,
}

impl UpstreamClient {
    /// Create a client for `url`; `timeout` of `None` waits forever
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Network {
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a client from the directory configuration
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, FetchError> {
        Self::new(config.upstream_url.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the document and confirm it parses as JSON
    ///
    /// A non-2xx status is an error even when the body is valid JSON; such
    /// a body is never handed back for relaying.
    pub async fn fetch_document(&self) -> Result<Vec<u8>, FetchError> {
        debug!(url = %self.url, "Fetching upstream document");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            message: e.to_string(),
        })?;

        serde_json::from_slice::<IgnoredAny>(&body).map_err(|e| FetchError::InvalidJson {
            message: e.to_string(),
        })?;

        debug!(url = %self.url, bytes = body.len(), "Fetched upstream document");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = DirectoryConfig {
            upstream_url: "http://127.0.0.1:9/index.json".to_string(),
            request_timeout_secs: Some(2),
            ..DirectoryConfig::default()
        };

        let client = UpstreamClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "http://127.0.0.1:9/index.json");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        // Grab a free port, then close it so nothing is listening there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = UpstreamClient::new(
            format!("http://{}/index.json", addr),
            Some(Duration::from_secs(2)),
        )
        .unwrap();

        let err = client.fetch_document().await.unwrap_err();
        assert_eq!(err.kind(), "network");
    }
}
