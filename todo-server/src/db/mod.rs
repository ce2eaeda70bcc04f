//! Database layer - connection pool and todo stores
//!
//! # Design Principles
//!
//! - One shared pool created at startup, connections acquired per query
//! - Parameterized SQL only
//! - Store reports not-found as its own error variant

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryTodoStore;
pub use pool::create_pool;
pub use postgres::PgTodoStore;
pub use store::{DbError, TodoStore};
