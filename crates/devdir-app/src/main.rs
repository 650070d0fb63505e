//! # devdir-server - Developer directory proxy
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Loads:   DirectoryConfig (shared)                        │
//! │    ├── Creates: UpstreamClient (adapter/gateway)                │
//! │    ├── Creates: axum Router (adapter/controller)                │
//! │    └── Runs:    The HTTP server until Ctrl-C                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration is read from `devdir.yaml`, `devdir.yml` or `devdir.json`
//! in the working directory when present; defaults apply otherwise.

use std::path::Path;

use shared::DirectoryConfig;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

const CONFIG_CANDIDATES: &[&str] = &["devdir.yaml", "devdir.yml", "devdir.json"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config_path = CONFIG_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.exists());

    match config_path {
        Some(path) => info!("Using configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }
    let config = DirectoryConfig::load(config_path)?;

    devdir_adapter::run_server(&config).await?;
    Ok(())
}
