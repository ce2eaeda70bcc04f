//! In-memory todo store for tests and local runs without PostgreSQL

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, TodoStore};
use crate::models::{CreateTodo, Todo};

/// Todo store backed by a `BTreeMap`; ids start at 1 and are listed in
/// ascending order.
#[derive(Default)]
pub struct MemoryTodoStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Todo>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn get(&self, id: i32) -> Result<Todo, DbError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound { id })
    }

    async fn put(&self, todo: &Todo) -> Result<(), DbError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&todo.id)
            .ok_or(DbError::NotFound { id: todo.id })?;
        row.title.clone_from(&todo.title);
        row.status.clone_from(&todo.status);
        Ok(())
    }

    async fn insert(&self, candidate: &CreateTodo) -> Result<i32, DbError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, Todo::with_id(id, candidate.clone()));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Todo>, DbError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }
}
