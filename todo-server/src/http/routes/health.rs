//! Readiness endpoint
//!
//! Answers 200 only when the todo store completes a round trip, so a load
//! balancer stops routing here while the database is unreachable.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}

/// GET /health - ping the store
async fn readiness(State(state): State<Arc<AppState>>) -> Result<Json<Readiness>, ApiError> {
    state
        .store
        .ping()
        .await
        .map_err(|source| ApiError::Unavailable { source })?;

    Ok(Json(Readiness {
        status: "ok",
        database: "reachable",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(readiness))
}
