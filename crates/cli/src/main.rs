//! devdir CLI - Browse the developer directory from a terminal
//!
//! Usage:
//!   devdir                          - Start interactive mode
//!   devdir interactive              - Start interactive mode
//!   devdir list [--name ...]        - Print the filtered table
//!   devdir skills                   - List the skill catalog
//!   devdir serve [--bind ...]       - Start the proxy server

use clap::{Parser, Subcommand};
use cli::commands::{ListCommand, ServeCommand, SkillsCommand};
use cli::interactive::InteractiveCli;
use cli::source::SourceArgs;

#[derive(Parser)]
#[command(name = "devdir")]
#[command(about = "devdir - Filterable developer directory and data proxy")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the directory in a REPL (the default)
    Interactive,
    /// Print the developers matching the given filters
    List(ListCommand),
    /// List the skills (and designations) present in the directory
    Skills(SkillsCommand),
    /// Start the proxy server
    Serve(ServeCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(cmd)) => cmd.run(&cli.source),
        Some(Commands::Skills(cmd)) => cmd.run(&cli.source),
        Some(Commands::Serve(cmd)) => cmd.run(&cli.source),
        Some(Commands::Interactive) | None => {
            let session = cli.source.load_session()?;
            let mut interactive = InteractiveCli::new(session);
            interactive.run()
        }
    }
}
