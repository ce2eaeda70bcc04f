//! Todo endpoints
//!
//! - `POST /todos` create
//! - `GET /todos` list
//! - `PUT /todos?id=<int>` update
//!
//! Each step that can fail ends the request with its own response.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{IdQuery, JsonBody};
use crate::http::server::AppState;
use crate::models::{CreateTodo, Todo, TodoList};

pub const LIST_FAILED: &str = "failed to build todo list";
pub const SAVE_FAILED: &str = "failed to save todo";
pub const FETCH_CREATED_FAILED: &str = "fetch created rec failed";
pub const VERIFY_FAILED: &str = "fetch (as part of verify) failed";
pub const ID_NOT_FOUND: &str = "id doesn't exist in db";
pub const UPDATE_FAILED: &str = "update failed";
pub const FETCH_UPDATED_FAILED: &str = "fetch updated rec failed";

/// POST /todos - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<CreateTodo>,
) -> Result<Json<Todo>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let id = state
        .store
        .insert(&payload)
        .await
        .map_err(|e| ApiError::store(SAVE_FAILED, e))?;
    tracing::info!(id, "todo created");

    let todo = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::store(FETCH_CREATED_FAILED, e))?;

    Ok(Json(todo))
}

/// GET /todos - list all todos
async fn list_todos(State(state): State<Arc<AppState>>) -> Result<Json<TodoList>, ApiError> {
    let todos = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::store(LIST_FAILED, e))?;

    Ok(Json(TodoList::from(todos)))
}

/// PUT /todos?id=<int> - replace title and status of an existing todo
async fn update_todo(
    State(state): State<Arc<AppState>>,
    IdQuery(raw_id): IdQuery,
    JsonBody(payload): JsonBody<CreateTodo>,
) -> Result<Json<Todo>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::bad_request(format!("invalid todo message: {}", e)))?;

    // Ids outside the column's range cannot match a row
    let id = i32::try_from(raw_id).map_err(|_| ApiError::bad_request(ID_NOT_FOUND))?;

    let existing = state.store.get(id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::bad_request(ID_NOT_FOUND)
        } else {
            ApiError::store(VERIFY_FAILED, e)
        }
    })?;
    tracing::debug!(?existing, "existing record from database");

    state
        .store
        .put(&Todo::with_id(id, payload))
        .await
        .map_err(|e| ApiError::store(UPDATE_FAILED, e))?;

    let updated = state
        .store
        .get(id)
        .await
        .map_err(|e| ApiError::store(FETCH_UPDATED_FAILED, e))?;
    tracing::info!(id, status = %updated.status, "todo updated");

    Ok(Json(updated))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/todos",
        get(list_todos).post(create_todo).put(update_todo),
    )
}
