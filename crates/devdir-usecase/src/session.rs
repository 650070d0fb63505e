//! DirectorySession - One user's browsing session
//!
//! Lifecycle:
//! 1. Load: await the EmployeeSource once; a failure is logged and the
//!    session starts with an empty list
//! 2. Filter: every criterion change goes through the FilterEngine
//! 3. Inspect: open/close a project detail, scoped to this session
//!
//! The project selection points into the immutable full list, so filter
//! changes never invalidate it.

use devdir_domain::{Employee, FetchError, FilterEngine, FilterEvent, FilterState, Project};
use tracing::{debug, error, info};

use crate::port::EmployeeSource;

/// Position of the project shown in the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRef {
    /// Index into the full list
    pub employee: usize,
    /// Index into that employee's projects
    pub project: usize,
}

/// DirectorySession - Full list, filter criteria and popup state
#[derive(Debug, Clone, Default)]
pub struct DirectorySession {
    engine: FilterEngine,
    selected: Option<ProjectRef>,
    load_error: Option<FetchError>,
}

impl DirectorySession {
    /// Start a session over an already-loaded list
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            engine: FilterEngine::new(employees),
            selected: None,
            load_error: None,
        }
    }

    /// Load the list from `source` and start a session over it
    ///
    /// Never fails: a FetchError leaves the session with no data and is
    /// kept for inspection via [`DirectorySession::load_error`].
    pub async fn load<S>(source: &S) -> Self
    where
        S: EmployeeSource + ?Sized,
    {
        match source.load().await {
            Ok(employees) => {
                info!(
                    source = %source.describe(),
                    employees = employees.len(),
                    "Loaded directory"
                );
                Self::new(employees)
            }
            Err(err) => {
                error!(
                    source = %source.describe(),
                    kind = err.kind(),
                    "Failed to load directory: {}", err
                );
                Self {
                    load_error: Some(err),
                    ..Self::default()
                }
            }
        }
    }

    // ========== Filtering ==========

    pub fn set_name_query(&mut self, query: impl Into<String>) -> FilterEvent {
        let event = self.engine.set_name_query(query);
        log_event(&event);
        event
    }

    pub fn set_designation_query(&mut self, query: impl Into<String>) -> FilterEvent {
        let event = self.engine.set_designation_query(query);
        log_event(&event);
        event
    }

    pub fn toggle_skill(&mut self, skill: &str) -> FilterEvent {
        let event = self.engine.toggle_skill(skill);
        log_event(&event);
        event
    }

    pub fn clear_skills(&mut self) -> FilterEvent {
        let event = self.engine.clear_skills();
        log_event(&event);
        event
    }

    /// Replace all criteria at once
    pub fn apply(&mut self, state: FilterState) -> FilterEvent {
        let event = self.engine.apply(state);
        log_event(&event);
        event
    }

    // ========== Project Detail ==========

    /// Open the `project`-th project of the `row`-th visible employee
    ///
    /// Returns `None` (and leaves the current selection alone) when either
    /// index is out of range.
    pub fn open_project(&mut self, row: usize, project: usize) -> Option<&Project> {
        self.engine.visible_at(row)?.projects().get(project)?;
        let employee = self.engine.visible_indices()[row];

        self.selected = Some(ProjectRef { employee, project });
        debug!(employee, project, "Opened project detail");
        self.selected_project().map(|(_, p)| p)
    }

    /// Close the detail view; returns whether one was open
    pub fn close_project(&mut self) -> bool {
        let was_open = self.selected.take().is_some();
        if was_open {
            debug!("Closed project detail");
        }
        was_open
    }

    /// The project currently shown, with its owner
    pub fn selected_project(&self) -> Option<(&Employee, &Project)> {
        let selected = self.selected?;
        let employee = self.engine.full_list().get(selected.employee)?;
        let project = employee.projects().get(selected.project)?;
        Some((employee, project))
    }

    pub fn selected_ref(&self) -> Option<ProjectRef> {
        self.selected
    }

    // ========== Queries ==========

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn state(&self) -> &FilterState {
        self.engine.state()
    }

    pub fn visible(&self) -> Vec<&Employee> {
        self.engine.visible()
    }

    /// The error that left this session empty, if any
    pub fn load_error(&self) -> Option<&FetchError> {
        self.load_error.as_ref()
    }
}

fn log_event(event: &FilterEvent) {
    match event {
        FilterEvent::Recomputed {
            criterion,
            visible,
            total,
        } => {
            debug!(%criterion, visible, total, "Recomputed visible employees");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use devdir_domain::{Task, TeamMember};

    struct StubSource {
        result: Result<Vec<Employee>, FetchError>,
    }

    #[async_trait]
    impl EmployeeSource for StubSource {
        async fn load(&self) -> Result<Vec<Employee>, FetchError> {
            self.result.clone()
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new("Alice")
                .with_designation("Developer")
                .with_skills(["Python"])
                .with_project(
                    Project::new("Atlas")
                        .with_description("Maps")
                        .with_member(TeamMember::new(Some("Alice".to_string()), "Lead"))
                        .with_task(Task::new("Tiles", "Done")),
                ),
            Employee::new("Bob")
                .with_designation("Tester")
                .with_skills(["SQL"])
                .with_project(Project::new("Beacon"))
                .with_project(Project::new("Compass")),
        ]
    }

    // ============== Loading ==============

    #[tokio::test]
    async fn test_load_success() {
        let source = StubSource { result: Ok(roster()) };
        let session = DirectorySession::load(&source).await;

        assert_eq!(session.visible().len(), 2);
        assert!(session.load_error().is_none());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_empty_list() {
        let source = StubSource {
            result: Err(FetchError::Status { code: 503 }),
        };
        let mut session = DirectorySession::load(&source).await;

        assert!(session.engine().is_empty_view());
        assert_eq!(session.load_error(), Some(&FetchError::Status { code: 503 }));

        session.set_name_query("a");
        assert!(session.visible().is_empty());
    }

    // ============== Filtering ==============

    #[test]
    fn test_filter_operations_delegate() {
        let mut session = DirectorySession::new(roster());

        assert_eq!(session.set_name_query("o").visible(), 1);
        assert_eq!(session.set_name_query("").visible(), 2);
        assert_eq!(session.toggle_skill("Python").visible(), 1);
        assert_eq!(session.clear_skills().visible(), 2);
        assert_eq!(session.set_designation_query("tEsT").visible(), 1);
        assert_eq!(session.apply(FilterState::new()).visible(), 2);
    }

    // ============== Project Detail ==============

    #[test]
    fn test_open_project_uses_visible_rows() {
        let mut session = DirectorySession::new(roster());
        session.set_name_query("bob");

        let project = session.open_project(0, 1).map(|p| p.name().to_string());
        assert_eq!(project.as_deref(), Some("Compass"));
        assert_eq!(
            session.selected_ref(),
            Some(ProjectRef {
                employee: 1,
                project: 1
            })
        );
    }

    #[test]
    fn test_open_project_out_of_range() {
        let mut session = DirectorySession::new(roster());

        assert!(session.open_project(5, 0).is_none());
        assert!(session.open_project(0, 3).is_none());
        assert!(session.selected_project().is_none());
    }

    #[test]
    fn test_invalid_open_keeps_existing_selection() {
        let mut session = DirectorySession::new(roster());
        session.open_project(0, 0);

        assert!(session.open_project(9, 9).is_none());
        let (owner, project) = session.selected_project().unwrap();
        assert_eq!(owner.name(), "Alice");
        assert_eq!(project.name(), "Atlas");
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let mut session = DirectorySession::new(roster());
        session.open_project(0, 0);

        session.set_name_query("bob");
        let (owner, _) = session.selected_project().unwrap();
        assert_eq!(owner.name(), "Alice");
    }

    #[test]
    fn test_close_project() {
        let mut session = DirectorySession::new(roster());
        assert!(!session.close_project());

        session.open_project(1, 0);
        assert!(session.close_project());
        assert!(session.selected_project().is_none());
    }
}
