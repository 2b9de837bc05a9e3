//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StorageError;

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    address TEXT NOT NULL,
    createdat TEXT NOT NULL,
    updatedat TEXT
)";

/// Configuration for the `SQLite` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:usercrud.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// How long a statement waits for a free connection before failing.
    pub acquire_timeout: Duration,
    /// Idle connections are closed after this long.
    pub idle_timeout: Option<Duration>,
    /// Connections are recycled after this long regardless of use.
    pub max_lifetime: Option<Duration>,
}

impl Config {
    /// Configuration for `database_url` with default pool limits.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Some(Duration::from_secs(300)),
            max_lifetime: Some(Duration::from_secs(1800)),
        }
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and makes sure the `users` table exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or table creation fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(self).await
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
///
/// Every statement checks a connection out of the pool for its own duration
/// and hands it back on completion, error, or cancellation.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and create the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or table creation fails.
    async fn initialize(config: Config) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        // An in-memory database lives only as long as one of its connections.
        let (idle_timeout, max_lifetime) = if config.is_in_memory() {
            (None, None)
        } else {
            (config.idle_timeout, config.max_lifetime)
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .idle_timeout(idle_timeout)
            .max_lifetime(max_lifetime)
            .connect_with(options)
            .await?;

        sqlx::query(CREATE_USERS).execute(&pool).await?;
        tracing::info!(
            max_connections = config.max_connections,
            "database pool ready"
        );

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
