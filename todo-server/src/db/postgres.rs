//! PostgreSQL todo store
//!
//! Expects the table to exist already:
//!
//! ```sql
//! CREATE TABLE todo (
//!     id     SERIAL PRIMARY KEY,
//!     title  TEXT NOT NULL,
//!     status TEXT NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, TodoStore};
use crate::models::{CreateTodo, Todo};

/// Todo store over a shared connection pool
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn get(&self, id: i32) -> Result<Todo, DbError> {
        sqlx::query_as::<_, Todo>("SELECT id, title, status FROM todo WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(DbError::NotFound { id })
    }

    async fn put(&self, todo: &Todo) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE todo SET title = $1, status = $2 WHERE id = $3")
            .bind(&todo.title)
            .bind(&todo.status)
            .bind(todo.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id: todo.id });
        }
        Ok(())
    }

    async fn insert(&self, candidate: &CreateTodo) -> Result<i32, DbError> {
        let id: i32 =
            sqlx::query_scalar("INSERT INTO todo (title, status) VALUES ($1, $2) RETURNING id")
                .bind(&candidate.title)
                .bind(&candidate.status)
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>("SELECT id, title, status FROM todo")
            .fetch_all(&self.pool)
            .await?;

        Ok(todos)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
