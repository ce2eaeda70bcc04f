//! Server and database configuration
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded by the binary before parsing):
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
//! - `DB_SSLMODE`: sqlx/libpq ssl mode (default: disable)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 5)
//! - `TODO_BIND`: listen address (default: 127.0.0.1:8080)
//! - `TODO_CORS_PERMISSIVE`: allow any origin (default: false)
//!
//! Configuration is read once at startup and passed down explicitly.

use std::fmt;
use std::net::SocketAddr;

use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connection settings for the todo database
#[derive(Args, Clone)]
pub struct DbConfig {
    /// Database host
    #[arg(long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Database name
    #[arg(long = "db-name", env = "DB_NAME")]
    pub name: String,

    /// TLS mode (disable, allow, prefer, require, verify-ca, verify-full)
    #[arg(long = "db-sslmode", env = "DB_SSLMODE", default_value = "disable")]
    pub ssl_mode: PgSslMode,

    /// Maximum number of pooled connections
    #[arg(
        long = "db-max-connections",
        env = "DB_MAX_CONNECTIONS",
        default_value_t = DEFAULT_MAX_CONNECTIONS
    )]
    pub max_connections: u32,
}

impl DbConfig {
    /// Config with defaults for everything but user and database name.
    pub fn new(user: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: user.into(),
            password: None,
            name: name.into(),
            ssl_mode: PgSslMode::Disable,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Build sqlx connect options. An empty password is treated as unset.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name)
            .ssl_mode(self.ssl_mode);

        match self.password.as_deref() {
            Some(password) if !password.is_empty() => options.password(password),
            _ => options,
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

/// HTTP server settings
#[derive(Args, Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(long = "bind", env = "TODO_BIND", default_value = "127.0.0.1:8080")]
    pub bind_addr: SocketAddr,

    /// Allow any CORS origin (default: localhost only)
    #[arg(long, env = "TODO_CORS_PERMISSIVE")]
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            cors_permissive: false,
        }
    }
}
