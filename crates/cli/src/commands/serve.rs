//! devdir serve command

use clap::Args;

use shared::DirectoryConfig;

use crate::source::SourceArgs;

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Listen address, e.g. 127.0.0.1:3000
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Upstream document URL
    #[arg(short, long)]
    pub upstream: Option<String>,
}

impl ServeCommand {
    /// Config file values with command-line overrides applied
    pub fn config(&self, source: &SourceArgs) -> anyhow::Result<DirectoryConfig> {
        let mut config = source.config()?;
        if let Some(bind) = &self.bind {
            config.bind = bind.clone();
        }
        if let Some(upstream) = &self.upstream {
            config.upstream_url = upstream.clone();
        }
        Ok(config)
    }

    pub fn run(&self, source: &SourceArgs) -> anyhow::Result<()> {
        let config = self.config(source)?;
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(devdir_adapter::run_server(&config))?;
        Ok(())
    }
}
