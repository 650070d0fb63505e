//! # devdir Domain Layer
//!
//! Pure model and filtering logic for the developer directory.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Employee, Project, FilterState                ││
//! │  │  error      - FetchError (what a data source can report)    ││
//! │  │  service/   - Domain services (FilterEngine)                ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Golden Rule
//!
//! **This crate has ZERO external dependencies.**
//!
//! Records arrive here already typed and normalized. Coercion of
//! malformed JSON happens in the adapter layer, so nothing in this
//! crate ever sees a "maybe a string" field.

pub mod error;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use error::FetchError;

pub use model::{
    employee::Employee,
    filter_state::FilterState,
    project::{Project, Task, TeamMember},
};

pub use service::filter_engine::{filter_employees, Criterion, FilterEngine, FilterEvent};
