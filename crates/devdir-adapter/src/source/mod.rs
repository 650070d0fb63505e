//! EmployeeSource Adapters - Where the directory is loaded from
//!
//! These implement the `EmployeeSource` port from devdir-usecase.

pub mod file;
pub mod http;
pub mod in_memory;

pub use file::FileEmployeeSource;
pub use http::HttpEmployeeSource;
pub use in_memory::InMemoryEmployeeSource;
