//! Domain Models - The vocabulary of the directory
//!
//! Every name here should match how we talk about the page:
//! employees, their projects, and the active filter criteria.

pub mod employee;
pub mod filter_state;
pub mod project;
