//! CLI Commands

pub mod list;
pub mod serve;
pub mod skills;

pub use list::ListCommand;
pub use serve::ServeCommand;
pub use skills::SkillsCommand;
