//! Where a CLI session loads its directory from

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use devdir_adapter::{FileEmployeeSource, HttpEmployeeSource, UpstreamClient};
use devdir_usecase::{DirectorySession, EmployeeSource};
use indicatif::{ProgressBar, ProgressStyle};
use shared::DirectoryConfig;
use tracing::debug;

/// Source selection shared by every command that reads the directory
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Document URL (the remote file, or a running server's /api/data)
    #[arg(long, global = true, conflicts_with = "file")]
    pub source: Option<String>,

    /// Local JSON document instead of a URL
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Configuration file (JSON or YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    /// Config file values with `--source` applied on top
    pub fn config(&self) -> anyhow::Result<DirectoryConfig> {
        let mut config = DirectoryConfig::load(self.config.as_deref())?;
        if let Some(url) = &self.source {
            config.upstream_url = url.clone();
        }
        Ok(config)
    }

    pub fn build_source(&self) -> anyhow::Result<Box<dyn EmployeeSource>> {
        if let Some(path) = &self.file {
            return Ok(Box::new(FileEmployeeSource::new(path.clone())));
        }
        let upstream = UpstreamClient::from_config(&self.config()?)?;
        Ok(Box::new(HttpEmployeeSource::new(Arc::new(upstream))))
    }

    /// Load the directory once, with a spinner while the request is in flight
    pub fn load_session(&self) -> anyhow::Result<DirectorySession> {
        let source = self.build_source()?;
        debug!(source = %source.describe(), "Loading directory");

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        spinner.set_message(format!("Loading {}", source.describe()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let session = runtime.block_on(DirectorySession::load(&*source));

        spinner.finish_and_clear();
        Ok(session)
    }
}
