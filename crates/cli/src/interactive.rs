//! Interactive REPL mode
//!
//! Drives one DirectorySession from the terminal. Plain text typed at the
//! prompt goes to the name search, the way typing into the search box does.

use std::collections::BTreeSet;
use std::io::{self, Write};

use console::style;
use devdir_domain::FilterEvent;
use devdir_usecase::DirectorySession;
use dialoguer::MultiSelect;

use crate::render::{render_project, render_table};

/// Interactive CLI over a loaded directory
pub struct InteractiveCli {
    session: DirectorySession,
}

impl InteractiveCli {
    pub fn new(session: DirectorySession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &DirectorySession {
        &self.session
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("devdir Interactive Mode");
        println!("Type /help for commands, /quit to exit");
        if let Some(err) = self.session.load_error() {
            println!("{} {}", style("Could not load directory:").red(), err);
        }
        println!();
        print!("{}", render_table(&self.session.visible()));

        loop {
            // Print prompt
            let engine = self.session.engine();
            print!("[{}/{}] > ", engine.visible_len(), engine.full_list().len());
            io::stdout().flush()?;

            // Read input
            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim_end_matches(['\r', '\n']);

            if input.trim().is_empty() {
                continue;
            }

            // Handle commands
            if input.starts_with('/') {
                match self.handle_command(input) {
                    Ok(should_exit) if should_exit => break,
                    Ok(_) => continue,
                    Err(e) => {
                        println!("Error: {}", e);
                        continue;
                    }
                }
            }

            // Plain input searches by name
            let event = self.session.set_name_query(input);
            self.report(&event);
        }

        Ok(())
    }

    fn report(&self, event: &FilterEvent) {
        if event.visible() == 0 {
            println!("{}", style("No developers found").dim());
        } else {
            print!("{}", render_table(&self.session.visible()));
        }
    }

    /// Everything after the command word, with the separating space removed
    fn argument<'a>(input: &'a str, cmd: &str) -> &'a str {
        let rest = &input[cmd.len()..];
        rest.strip_prefix(' ').unwrap_or(rest)
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  <text>               - Search by name");
                println!("  /name [text]         - Search by name (empty clears)");
                println!("  /designation [text]  - Filter by designation (empty clears)");
                println!("  /skill <skill>       - Toggle a skill filter");
                println!("  /skills              - Pick skills from a checklist");
                println!("  /clear-skills        - Drop all skill filters");
                println!("  /list                - Show the visible developers");
                println!("  /project <row> <n>   - Show project n of row");
                println!("  /close               - Close the project view");
                println!("  /status              - Show active filters");
                println!("  /quit                - Exit");
            }
            "/name" => {
                let event = self.session.set_name_query(Self::argument(input, cmd));
                self.report(&event);
            }
            "/designation" => {
                let event = self.session.set_designation_query(Self::argument(input, cmd));
                self.report(&event);
            }
            "/skill" => {
                let skill = Self::argument(input, cmd).trim();
                if skill.is_empty() {
                    anyhow::bail!("Usage: /skill <skill>");
                }
                let event = self.session.toggle_skill(skill);
                self.report(&event);
            }
            "/skills" => {
                self.pick_skills()?;
            }
            "/clear-skills" => {
                let event = self.session.clear_skills();
                self.report(&event);
            }
            "/list" => {
                print!("{}", render_table(&self.session.visible()));
            }
            "/project" => {
                let (row, project) = match parts.as_slice() {
                    [_, row, project] => (row.parse::<usize>()?, project.parse::<usize>()?),
                    _ => anyhow::bail!("Usage: /project <row> <n>"),
                };
                if row == 0 || project == 0 {
                    anyhow::bail!("Rows and projects are numbered from 1");
                }
                if self.session.open_project(row - 1, project - 1).is_none() {
                    anyhow::bail!("No project {} on row {}", project, row);
                }
                if let Some((owner, project)) = self.session.selected_project() {
                    print!("{}", render_project(owner, project));
                }
            }
            "/close" => {
                if !self.session.close_project() {
                    println!("No project is open");
                }
            }
            "/status" => {
                let state = self.session.state();
                println!("Status:");
                println!("  Name: {:?}", state.name_query());
                println!("  Designation: {:?}", state.designation_query());
                println!("  Skills: {:?}", state.selected_skills());
                println!(
                    "  Showing: {} of {}",
                    self.session.engine().visible_len(),
                    self.session.engine().full_list().len()
                );
                if let Some((owner, project)) = self.session.selected_project() {
                    println!("  Open project: {} ({})", project.name(), owner.name_cell());
                }
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    /// Checkbox dropdown over every known skill
    fn pick_skills(&mut self) -> anyhow::Result<()> {
        let available: Vec<String> = self
            .session
            .engine()
            .available_skills()
            .into_iter()
            .map(str::to_string)
            .collect();
        if available.is_empty() {
            println!("No skills to choose from");
            return Ok(());
        }

        let selected = self.session.state().selected_skills().clone();
        let defaults: Vec<bool> = available.iter().map(|s| selected.contains(s)).collect();

        let chosen = MultiSelect::new()
            .with_prompt("Skills")
            .items(&available)
            .defaults(&defaults)
            .interact()?;

        let toggles = skill_toggles(&available, &selected, &chosen);
        for skill in &toggles {
            self.session.toggle_skill(skill);
        }
        print!("{}", render_table(&self.session.visible()));
        Ok(())
    }
}

/// Skills whose selection differs between `selected` and the checklist result
pub fn skill_toggles(
    available: &[String],
    selected: &BTreeSet<String>,
    chosen: &[usize],
) -> Vec<String> {
    available
        .iter()
        .enumerate()
        .filter(|(i, skill)| chosen.contains(i) != selected.contains(*skill))
        .map(|(_, skill)| skill.clone())
        .collect()
}
