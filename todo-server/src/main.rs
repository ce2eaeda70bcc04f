//! todo-server binary - loads configuration, connects the pool, serves HTTP

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use todo_server::config::{DbConfig, ServerConfig};
use todo_server::db::{create_pool, PgTodoStore};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "todo-server",
    version,
    about = "HTTP service for creating, listing and updating todos in PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    server: ServerConfig,

    #[command(flatten)]
    db: DbConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; flags and the process environment still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    tracing::debug!(db = ?cli.db, server = ?cli.server, "configuration loaded");

    let pool = create_pool(&cli.db)
        .await
        .with_context(|| format!("failed to connect to database at {}:{}", cli.db.host, cli.db.port))?;

    todo_server::run_server(Arc::new(PgTodoStore::new(pool)), cli.server)
        .await
        .context("server failed")?;

    Ok(())
}
