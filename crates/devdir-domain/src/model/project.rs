//! Project - Detail shown in the popup
//!
//! Projects are never filtered on. They only feed the detail view.

/// A member of a project team
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamMember {
    pub name: Option<String>,
    pub role: String,
}

impl TeamMember {
    pub fn new(name: Option<String>, role: impl Into<String>) -> Self {
        Self {
            name,
            role: role.into(),
        }
    }

    /// "name - role", or just "role" when the name is missing or empty
    pub fn display_line(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => format!("{} - {}", name, self.role),
            _ => self.role.clone(),
        }
    }
}

/// A task tracked on a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub status: String,
}

impl Task {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    pub fn display_line(&self) -> String {
        format!("{} - {}", self.name, self.status)
    }
}

/// Project - Something an employee works on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    name: String,
    description: String,
    team: Vec<TeamMember>,
    tasks: Vec<Task>,
}

impl Project {
    /// Create a new Project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: add description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: add a team member
    pub fn with_member(mut self, member: TeamMember) -> Self {
        self.team.push(member);
        self
    }

    /// Builder: add a task
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
