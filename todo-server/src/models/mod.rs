//! Domain models with validation
//!
//! Request payloads are checked with [`CreateTodo::validate`] before they
//! reach the store. Invalid input returns ValidationError, not panic.

pub mod status;
pub mod todo;
pub mod validation;

pub use status::Status;
pub use todo::{CreateTodo, Todo, TodoList};
pub use validation::ValidationError;
