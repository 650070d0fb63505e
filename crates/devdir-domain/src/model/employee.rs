//! Employee - One row of the directory
//!
//! Employee is read-only once ingested. Absent fields are already
//! normalized to empty values, so every getter is infallible.

use super::project::Project;

/// Placeholder shown for an empty cell
pub const EMPTY_CELL: &str = "--";

/// Employee - A person listed in the directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    /// Display name (may be empty)
    name: String,
    /// Job title (may be empty)
    designation: String,
    /// Skills in source order
    skills: Vec<String>,
    /// Projects in source order
    projects: Vec<Project>,
}

impl Employee {
    /// Create a new Employee with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder: set designation
    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = designation.into();
        self
    }

    /// Builder: set skills
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.skills = skills.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Builder: add a project
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Builder: set projects
    pub fn with_projects(mut self, projects: impl IntoIterator<Item = Project>) -> Self {
        self.projects = projects.into_iter().collect();
        self
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Exact, case-sensitive skill lookup
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    // ========== Display ==========

    /// Name cell, `--` when empty
    pub fn name_cell(&self) -> &str {
        non_empty_or_placeholder(&self.name)
    }

    /// Designation cell, `--` when empty
    pub fn designation_cell(&self) -> &str {
        non_empty_or_placeholder(&self.designation)
    }

    /// Skills joined with ", ", `--` when there are none
    pub fn skills_cell(&self) -> String {
        let joined = self.skills.join(", ");
        if joined.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            joined
        }
    }
}

fn non_empty_or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_CELL
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_creation() {
        let employee = Employee::new("Alice")
            .with_designation("Developer")
            .with_skills(["Python", "SQL"]);

        assert_eq!(employee.name(), "Alice");
        assert_eq!(employee.designation(), "Developer");
        assert_eq!(employee.skills(), &["Python", "SQL"]);
        assert!(employee.projects().is_empty());
    }

    #[test]
    fn test_has_skill_is_case_sensitive() {
        let employee = Employee::new("Alice").with_skills(["Python"]);

        assert!(employee.has_skill("Python"));
        assert!(!employee.has_skill("python"));
        assert!(!employee.has_skill("Pyth"));
    }

    #[test]
    fn test_cells_fall_back_to_placeholder() {
        let employee = Employee::default();

        assert_eq!(employee.name_cell(), "--");
        assert_eq!(employee.designation_cell(), "--");
        assert_eq!(employee.skills_cell(), "--");
    }

    #[test]
    fn test_skills_cell_joins() {
        let employee = Employee::new("Bob").with_skills(["SQL", "Go"]);
        assert_eq!(employee.skills_cell(), "SQL, Go");
    }

    #[test]
    fn test_with_project_appends() {
        let employee = Employee::new("Carol")
            .with_project(Project::new("Atlas"))
            .with_project(Project::new("Beacon"));

        let names: Vec<&str> = employee.projects().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Atlas", "Beacon"]);
    }
}
