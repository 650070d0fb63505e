//! FilterState - The active search criteria
//!
//! FilterState is a Value Object. Two states with the same criteria
//! select the same employees from the same list, always.

use std::collections::BTreeSet;

use super::employee::Employee;

/// The three criteria the directory can filter on
///
/// All combinations are legal. Criteria are conjunctive: an employee
/// is visible only if every non-empty criterion matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring of the name (trimmed before matching)
    name_query: String,
    /// Any-of set, exact and case-sensitive
    selected_skills: BTreeSet<String>,
    /// Case-insensitive substring of the designation
    designation_query: String,
}

impl FilterState {
    /// Create an all-empty state (matches everyone)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the name query
    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    /// Builder: set the designation query
    pub fn with_designation_query(mut self, query: impl Into<String>) -> Self {
        self.designation_query = query.into();
        self
    }

    /// Builder: select skills
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.selected_skills = skills.into_iter().map(|s| s.into()).collect();
        self
    }

    // ========== Getters ==========

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn designation_query(&self) -> &str {
        &self.designation_query
    }

    pub fn selected_skills(&self) -> &BTreeSet<String> {
        &self.selected_skills
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.name_query.trim().is_empty()
            && self.designation_query.is_empty()
            && self.selected_skills.is_empty()
    }

    // ========== Mutation ==========

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    pub fn set_designation_query(&mut self, query: impl Into<String>) {
        self.designation_query = query.into();
    }

    /// Add the skill if absent, remove it if present.
    ///
    /// Returns `true` if the skill is selected afterwards.
    pub fn toggle_skill(&mut self, skill: &str) -> bool {
        if self.selected_skills.remove(skill) {
            false
        } else {
            self.selected_skills.insert(skill.to_string());
            true
        }
    }

    pub fn clear_skills(&mut self) {
        self.selected_skills.clear();
    }

    // ========== Predicates ==========

    /// Name criterion: empty query always matches
    pub fn name_matches(&self, employee: &Employee) -> bool {
        let query = self.name_query.trim();
        if query.is_empty() {
            return true;
        }
        employee
            .name()
            .to_uppercase()
            .contains(&query.to_uppercase())
    }

    /// Designation criterion: empty query always matches
    pub fn designation_matches(&self, employee: &Employee) -> bool {
        if self.designation_query.is_empty() {
            return true;
        }
        employee
            .designation()
            .to_uppercase()
            .contains(&self.designation_query.to_uppercase())
    }

    /// Skills criterion: empty selection always matches, otherwise any-of
    pub fn skills_match(&self, employee: &Employee) -> bool {
        self.selected_skills.is_empty()
            || self.selected_skills.iter().any(|s| employee.has_skill(s))
    }

    /// All criteria together
    pub fn matches(&self, employee: &Employee) -> bool {
        self.name_matches(employee)
            && self.designation_matches(employee)
            && self.skills_match(employee)
    }
}
