//! Persistent key-value storage backed by `SQLite` via `SQLx`.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use thiserror::Error;

/// Subdirectory under the arbor home where the database file is stored.
pub const DB_DIR: &str = "db";

/// Default database filename.
pub const DB_FILE: &str = "arbor.db";

/// Maximum number of pooled `SQLite` connections for the on-disk database.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 4;

/// Boxed async result used by [`KeyValueStore`] trait methods.
pub type StoreFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Failure raised by the persistent store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to create database directory: {0}")]
    CreateDirectory(#[source] std::io::Error),
    #[error("failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
    #[error("failed to run migrations: {0}")]
    Migrate(#[source] sqlx::migrate::MigrateError),
    #[error("failed to read `{key}`: {source}")]
    Read {
        key: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to write `{key}`: {source}")]
    Write {
        key: String,
        #[source]
        source: sqlx::Error,
    },
}

/// Async string key-value boundary used to persist app state across runs.
///
/// Production uses [`Database`], while tests can inject `MockKeyValueStore`
/// to simulate missing values and storage failures.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` when nothing was
    /// stored yet.
    ///
    /// # Errors
    /// Returns an error if the lookup query fails.
    fn get(&self, key: String) -> StoreFuture<Result<Option<String>, StoreError>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns an error if the value cannot be written.
    fn set(&self, key: String, value: String) -> StoreFuture<Result<(), StoreError>>;
}

/// Thin wrapper around a `SQLite` connection pool holding the `kv` table.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens the `SQLite` database and runs embedded migrations.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the database cannot
    /// be opened, or migrations fail.
    pub async fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(StoreError::CreateDirectory)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(DB_POOL_MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;

        Self::migrate(pool).await
    }

    /// Opens a private in-memory database with migrations applied.
    ///
    /// # Errors
    /// Returns an error if the connection or migrations fail.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new().filename(":memory:");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StoreError::Migrate)?;

        Ok(Self { pool })
    }

    /// Inserts or replaces the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the row cannot be written.
    pub async fn upsert_value(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            r"
INSERT INTO kv (key, value)
VALUES (?, ?)
ON CONFLICT(key) DO UPDATE
SET value = excluded.value
",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|source| StoreError::Write {
            key: key.to_string(),
            source,
        })?;

        Ok(())
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the lookup query fails.
    pub async fn get_value(&self, key: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query(
            r"
SELECT value
FROM kv
WHERE key = ?
",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|source| StoreError::Read {
            key: key.to_string(),
            source,
        })?;

        Ok(row.map(|row| row.get("value")))
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: String) -> StoreFuture<Result<Option<String>, StoreError>> {
        let database = self.clone();

        Box::pin(async move { database.get_value(&key).await })
    }

    fn set(&self, key: String, value: String) -> StoreFuture<Result<(), StoreError>> {
        let database = self.clone();

        Box::pin(async move { database.upsert_value(&key, &value).await })
    }
}
