//! Todo records and request payloads

use serde::{Deserialize, Serialize};

use super::{Status, ValidationError};

/// Persisted todo record.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub status: String,
}

impl Todo {
    /// Apply a payload to an existing id (update keeps the id).
    pub fn with_id(id: i32, payload: CreateTodo) -> Self {
        Self {
            id,
            title: payload.title,
            status: payload.status,
        }
    }
}

/// Mutable subset of a todo, used for both create and update bodies.
///
/// Missing fields decode as empty strings so that they surface as
/// validation failures rather than decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTodo {
    pub title: String,
    pub status: String,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: status.into(),
        }
    }

    /// Check the payload before it is persisted.
    ///
    /// # Rules
    /// - `title` is non-empty (whitespace counts as content)
    /// - `status` is non-empty and one of [`Status::allowed`]
    ///
    /// # Example
    /// ```
    /// use todo_server::models::CreateTodo;
    ///
    /// assert!(CreateTodo::new("buy milk", "open").validate().is_ok());
    /// assert!(CreateTodo::new("", "open").validate().is_err());
    /// assert!(CreateTodo::new("buy milk", "someday").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        self.status.parse::<Status>()?;
        Ok(())
    }
}

/// Response envelope for the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(rename = "TodoList")]
    pub todos: Vec<Todo>,
}

impl From<Vec<Todo>> for TodoList {
    fn from(todos: Vec<Todo>) -> Self {
        Self { todos }
    }
}
