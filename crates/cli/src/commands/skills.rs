//! devdir skills command

use clap::Args;

use crate::source::SourceArgs;

#[derive(Debug, Args)]
pub struct SkillsCommand {
    /// Also list designations
    #[arg(long)]
    pub designations: bool,
}

impl SkillsCommand {
    pub fn run(&self, source: &SourceArgs) -> anyhow::Result<()> {
        let session = source.load_session()?;
        let engine = session.engine();

        println!("Skills:");
        for skill in engine.available_skills() {
            println!("  - {}", skill);
        }

        if self.designations {
            println!("Designations:");
            for designation in engine.available_designations() {
                println!("  - {}", designation);
            }
        }
        Ok(())
    }
}
