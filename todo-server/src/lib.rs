//! todo-server: HTTP service for todo records
//!
//! Create, list and update todos stored in a single PostgreSQL table.
//! Handlers are written against the [`db::TodoStore`] trait so the router
//! can run over PostgreSQL ([`db::PgTodoStore`]) or in memory
//! ([`db::MemoryTodoStore`]).

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DbConfig, ServerConfig};
pub use http::{build_router, run_server, AppState};
