//! devdir list command

use clap::Args;
use devdir_adapter::EmployeeRecord;
use devdir_domain::FilterState;

use crate::render::render_table;
use crate::source::SourceArgs;

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Name contains (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Designation contains (case-insensitive)
    #[arg(short, long)]
    pub designation: Option<String>,

    /// Has this skill (repeatable, any-of, case-sensitive)
    #[arg(short, long = "skill")]
    pub skills: Vec<String>,

    /// Print the visible employees as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    /// The filter criteria given on the command line
    pub fn filter_state(&self) -> FilterState {
        FilterState::new()
            .with_name_query(self.name.clone().unwrap_or_default())
            .with_designation_query(self.designation.clone().unwrap_or_default())
            .with_skills(self.skills.iter().cloned())
    }

    pub fn run(&self, source: &SourceArgs) -> anyhow::Result<()> {
        let mut session = source.load_session()?;
        session.apply(self.filter_state());

        if self.json {
            let records: Vec<EmployeeRecord> = session
                .visible()
                .into_iter()
                .map(EmployeeRecord::from)
                .collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            print!("{}", render_table(&session.visible()));
        }
        Ok(())
    }
}
