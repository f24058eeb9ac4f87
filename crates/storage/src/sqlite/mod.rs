use std::sync::Arc;
use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;

use crate::repository::{KeyValueStore, Storage};

mod kv_repo;
mod migrate;

/// Scope used when none is configured.
pub const DEFAULT_SCOPE: &str = "local";

/// SQLite-backed key-value store. Every key lives inside a scope, the
/// counterpart of a browser origin.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
    scope: String,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("storage scope cannot be empty")]
    EmptyScope,
}

impl SqliteRepository {
    /// Connect to `SQLite` using the given URL, in the default scope.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the connection cannot be established or the
    /// connection pragmas fail.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query("PRAGMA busy_timeout = 5000;")
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        Ok(Self {
            pool,
            scope: DEFAULT_SCOPE.to_owned(),
        })
    }

    /// Same pool, different scope.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError::EmptyScope` for a blank scope.
    pub fn with_scope(&self, scope: &str) -> Result<Self, SqliteInitError> {
        let scope = scope.trim();
        if scope.is_empty() {
            return Err(SqliteInitError::EmptyScope);
        }
        Ok(Self {
            pool: self.pool.clone(),
            scope: scope.to_owned(),
        })
    }

    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Create tables if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if migration queries fail.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }
}

impl Storage {
    /// Build a `Storage` backed by `SQLite`, reading and writing inside `scope`.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if connection or migrations cannot be
    /// completed, or the scope is blank.
    pub async fn sqlite(database_url: &str, scope: &str) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::connect(database_url)
            .await?
            .with_scope(scope)?;
        repo.migrate().await?;
        let kv: Arc<dyn KeyValueStore> = Arc::new(repo);
        Ok(Self { kv })
    }
}
