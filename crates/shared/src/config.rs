//! Configuration types for devdir

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::error::{DevdirError, UnsupportedFormatError};

/// Where the employee document lives by default
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://raw.githubusercontent.com/dixitsoham7/dixitsoham7.github.io/main/index.json";

/// Default listen address for the proxy server
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Directory configuration (devdir.json / devdir.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryConfig {
    /// Address the proxy server listens on
    pub bind: String,

    /// Remote JSON document relayed by `GET /api/data`
    pub upstream_url: String,

    /// Upstream request timeout; `None` waits forever
    pub request_timeout_secs: Option<u64>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl DirectoryConfig {
    /// Load configuration from a JSON or YAML file, picked by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let config: Self = match extension.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            _ => {
                return Err(UnsupportedFormatError {
                    extension,
                    supported: vec!["json".to_string(), "yaml".to_string(), "yml".to_string()],
                }
                .into())
            }
        };
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Parsed listen address
    pub fn bind_addr(&self) -> crate::Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| DevdirError::Config(format!("Invalid bind address '{}': {}", self.bind, e)))
    }

    /// Upstream timeout as a Duration
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DirectoryConfig::default();
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.bind_addr().unwrap().port(), 3000);
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_config_parse_json() {
        let json = r#"{
            "bind": "0.0.0.0:8080",
            "upstreamUrl": "http://localhost:9000/index.json",
            "requestTimeoutSecs": 5
        }"#;

        let config: DirectoryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8080");
        assert_eq!(config.upstream_url, "http://localhost:9000/index.json");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: DirectoryConfig = serde_json::from_str(r#"{"bind": "127.0.0.1:4000"}"#).unwrap();
        assert_eq!(config.bind, "127.0.0.1:4000");
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "upstreamUrl: http://example.test/data.json").unwrap();

        let config = DirectoryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.upstream_url, "http://example.test/data.json");
        assert_eq!(config.bind, DEFAULT_BIND);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();

        let err = DirectoryConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DevdirError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_invalid_bind() {
        let config = DirectoryConfig {
            bind: "not-an-address".to_string(),
            ..DirectoryConfig::default()
        };
        assert!(matches!(config.bind_addr(), Err(DevdirError::Config(_))));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(DirectoryConfig::load(None).unwrap(), DirectoryConfig::default());
    }
}
