//! Filter Engine - Derives the visible rows from the full list
//!
//! The engine owns the immutable full list and the current FilterState.
//! Every change to a criterion recomputes the visible subset from scratch:
//!
//! 1. Update: replace one field of the FilterState
//! 2. Recompute: `filter_employees(full_list, state)`
//! 3. Report: return a FilterEvent describing what changed
//!
//! Because recomputation never looks at the previous result, the order in
//! which criteria are set cannot affect the final visible list.
//!
//! This is pure domain logic - no I/O, no async, no external dependencies.

use std::collections::HashSet;

use crate::model::employee::Employee;
use crate::model::filter_state::FilterState;

/// Which criterion triggered a recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Name,
    Designation,
    Skills,
    /// The whole state was replaced (initial load, apply, reset)
    All,
}

impl core::fmt::Display for Criterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Criterion::Name => "name",
            Criterion::Designation => "designation",
            Criterion::Skills => "skills",
            Criterion::All => "all",
        };
        write!(f, "{}", name)
    }
}

/// Events emitted by the FilterEngine
///
/// Used for logging and UI refresh. The engine itself does nothing
/// with these - it just reports what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The visible subset was recomputed
    Recomputed {
        criterion: Criterion,
        visible: usize,
        total: usize,
    },
}

impl FilterEvent {
    /// Number of visible rows after the change
    pub fn visible(&self) -> usize {
        match self {
            FilterEvent::Recomputed { visible, .. } => *visible,
        }
    }
}

/// Stable filter: the employees of `list` matching `state`, in list order
pub fn filter_employees<'a>(list: &'a [Employee], state: &FilterState) -> Vec<&'a Employee> {
    list.iter().filter(|e| state.matches(e)).collect()
}

/// FilterEngine - Holds the full list and the active criteria
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    /// Written once at construction, never mutated
    full_list: Vec<Employee>,
    state: FilterState,
    /// Indices into `full_list`, ascending
    visible: Vec<usize>,
}

impl FilterEngine {
    /// Create an engine showing the whole list
    pub fn new(full_list: Vec<Employee>) -> Self {
        let visible = (0..full_list.len()).collect();
        Self {
            full_list,
            state: FilterState::default(),
            visible,
        }
    }

    // ========== Operations ==========

    /// Replace the name query and recompute
    pub fn set_name_query(&mut self, query: impl Into<String>) -> FilterEvent {
        self.state.set_name_query(query);
        self.recompute(Criterion::Name)
    }

    /// Replace the designation query and recompute
    ///
    /// An empty query drops the designation criterion entirely.
    pub fn set_designation_query(&mut self, query: impl Into<String>) -> FilterEvent {
        self.state.set_designation_query(query);
        self.recompute(Criterion::Designation)
    }

    /// Select the skill if unselected, unselect it otherwise
    pub fn toggle_skill(&mut self, skill: &str) -> FilterEvent {
        self.state.toggle_skill(skill);
        self.recompute(Criterion::Skills)
    }

    /// Drop every selected skill
    pub fn clear_skills(&mut self) -> FilterEvent {
        self.state.clear_skills();
        self.recompute(Criterion::Skills)
    }

    /// Replace the whole state at once
    pub fn apply(&mut self, state: FilterState) -> FilterEvent {
        self.state = state;
        self.recompute(Criterion::All)
    }

    /// Back to all-empty criteria
    pub fn reset(&mut self) -> FilterEvent {
        self.apply(FilterState::default())
    }

    fn recompute(&mut self, criterion: Criterion) -> FilterEvent {
        self.visible = self
            .full_list
            .iter()
            .enumerate()
            .filter(|(_, e)| self.state.matches(e))
            .map(|(i, _)| i)
            .collect();

        FilterEvent::Recomputed {
            criterion,
            visible: self.visible.len(),
            total: self.full_list.len(),
        }
    }

    // ========== Queries ==========

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn full_list(&self) -> &[Employee] {
        &self.full_list
    }

    /// The visible subset, in full-list order
    pub fn visible(&self) -> Vec<&Employee> {
        self.visible.iter().map(|&i| &self.full_list[i]).collect()
    }

    /// The `row`-th visible employee
    pub fn visible_at(&self, row: usize) -> Option<&Employee> {
        self.visible.get(row).map(|&i| &self.full_list[i])
    }

    /// Positions of the visible employees in the full list
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// True when the presentation should show the "no developers" row
    pub fn is_empty_view(&self) -> bool {
        self.visible.is_empty()
    }

    /// Distinct skills across the full list, first-seen order
    pub fn available_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.full_list
            .iter()
            .flat_map(|e| e.skills().iter())
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Distinct non-empty designations across the full list, first-seen order
    pub fn available_designations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.full_list
            .iter()
            .map(Employee::designation)
            .filter(|d| !d.is_empty() && seen.insert(*d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Employee {
        Employee::new("Alice")
            .with_designation("Developer")
            .with_skills(["Python"])
    }

    fn bob() -> Employee {
        Employee::new("Bob")
            .with_designation("Tester")
            .with_skills(["SQL"])
    }

    fn engine() -> FilterEngine {
        FilterEngine::new(vec![alice(), bob()])
    }

    fn names(engine: &FilterEngine) -> Vec<&str> {
        engine.visible().iter().map(|e| e.name()).collect()
    }

    // ============== Initial State ==============

    #[test]
    fn test_new_engine_shows_everything() {
        let engine = engine();
        assert_eq!(names(&engine), vec!["Alice", "Bob"]);
        assert!(engine.state().is_empty());
        assert!(!engine.is_empty_view());
    }

    #[test]
    fn test_empty_list_is_always_empty() {
        let mut engine = FilterEngine::new(Vec::new());
        assert!(engine.is_empty_view());

        engine.set_name_query("a");
        engine.toggle_skill("Python");
        engine.set_designation_query("dev");
        assert!(engine.visible().is_empty());

        engine.reset();
        assert!(engine.visible().is_empty());
    }

    // ============== Name ==============

    #[test]
    fn test_name_query_scenarios() {
        let mut engine = engine();

        engine.set_name_query("a");
        assert_eq!(names(&engine), vec!["Alice"]);

        engine.set_name_query("o");
        assert_eq!(names(&engine), vec!["Bob"]);

        engine.set_name_query("");
        assert_eq!(names(&engine), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_name_query_event() {
        let mut engine = engine();
        let event = engine.set_name_query("zz");

        assert_eq!(
            event,
            FilterEvent::Recomputed {
                criterion: Criterion::Name,
                visible: 0,
                total: 2,
            }
        );
        assert!(engine.is_empty_view());
    }

    // ============== Designation ==============

    #[test]
    fn test_designation_query_and_reset() {
        let mut engine = engine();

        engine.set_designation_query("test");
        assert_eq!(names(&engine), vec!["Bob"]);

        let event = engine.set_designation_query("");
        assert_eq!(event.visible(), 2);
    }

    #[test]
    fn test_designation_reset_keeps_other_criteria() {
        let mut engine = engine();
        engine.set_name_query("ali");
        engine.set_designation_query("Tester");
        assert!(engine.is_empty_view());

        engine.set_designation_query("");
        assert_eq!(names(&engine), vec!["Alice"]);
    }

    // ============== Skills ==============

    #[test]
    fn test_any_selected_skill_matches() {
        let mut engine = engine();
        engine.toggle_skill("Python");
        engine.toggle_skill("SQL");

        assert_eq!(names(&engine), vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut engine = engine();
        engine.set_name_query("b");
        let state_before = engine.state().clone();
        let visible_before = engine.visible_indices().to_vec();

        engine.toggle_skill("Python");
        assert!(engine.is_empty_view());
        engine.toggle_skill("Python");

        assert_eq!(engine.state(), &state_before);
        assert_eq!(engine.visible_indices(), visible_before.as_slice());
    }

    #[test]
    fn test_clear_skills() {
        let mut engine = engine();
        engine.toggle_skill("SQL");
        assert_eq!(names(&engine), vec!["Bob"]);

        let event = engine.clear_skills();
        assert_eq!(event.visible(), 2);
        assert!(engine.state().selected_skills().is_empty());
    }

    // ============== Whole State ==============

    #[test]
    fn test_apply_matches_pure_function() {
        let mut engine = engine();
        let state = FilterState::new()
            .with_designation_query("DEV")
            .with_skills(["Python", "Rust"]);

        engine.apply(state.clone());

        let expected = filter_employees(engine.full_list(), &state);
        assert_eq!(engine.visible(), expected);
        assert_eq!(names(&engine), vec!["Alice"]);
    }

    #[test]
    fn test_visible_at() {
        let mut engine = engine();
        engine.set_name_query("o");

        assert_eq!(engine.visible_at(0).map(|e| e.name()), Some("Bob"));
        assert!(engine.visible_at(1).is_none());
        assert_eq!(engine.visible_indices(), &[1]);
    }

    // ============== Catalogs ==============

    #[test]
    fn test_available_skills_first_seen_order() {
        let engine = FilterEngine::new(vec![
            Employee::new("A").with_skills(["Rust", "SQL"]),
            Employee::new("B").with_skills(["SQL", "Go"]),
            Employee::new("C"),
        ]);

        assert_eq!(engine.available_skills(), vec!["Rust", "SQL", "Go"]);
    }

    #[test]
    fn test_available_designations_skip_empty() {
        let engine = FilterEngine::new(vec![
            Employee::new("A").with_designation("Developer"),
            Employee::new("B"),
            Employee::new("C").with_designation("Developer"),
            Employee::new("D").with_designation("Designer"),
        ]);

        assert_eq!(engine.available_designations(), vec!["Developer", "Designer"]);
    }
}
