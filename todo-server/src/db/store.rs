//! Store trait shared by the PostgreSQL and in-memory backends

use async_trait::async_trait;

use crate::models::{CreateTodo, Todo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: todo '{id}'")]
    NotFound { id: i32 },
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Persistence operations for todo records (testable)
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Fetch a todo by primary key.
    async fn get(&self, id: i32) -> Result<Todo, DbError>;

    /// Overwrite title and status of an existing todo.
    async fn put(&self, todo: &Todo) -> Result<(), DbError>;

    /// Insert a new todo and return its generated id.
    async fn insert(&self, candidate: &CreateTodo) -> Result<i32, DbError>;

    /// Fetch all todos in store order.
    async fn list(&self) -> Result<Vec<Todo>, DbError>;

    /// Round trip to the backing store. Stores without one are always ready.
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
