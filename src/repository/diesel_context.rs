//! Diesel database context for managing connections and repository access.
//!
//! Provides a unified entry point for database operations using Diesel ORM.

use std::path::Path;

use diesel_async::SimpleAsyncConnection;
use tracing::debug;

use super::pool::{DbError, SqlitePool};
use super::util::{to_diesel_error, validate_database_url};
use crate::access_log::DieselAccessLogRepository;

/// Diesel database context that manages the connection pool and provides repository access.
///
/// Create one context per command or service, then use it to access repositories.
///
/// # Example
/// ```ignore
/// let ctx = DieselDbContext::from_url("sqlite:postal-distance.db")?;
/// ctx.init_schema().await?;
/// let counts = ctx.access_logs().count_by_postal_code().await?;
/// ```
#[derive(Clone)]
pub struct DieselDbContext {
    pool: SqlitePool,
}

impl DieselDbContext {
    /// Create a new database context from a file path.
    pub fn new(db_path: &Path) -> Self {
        Self {
            pool: SqlitePool::from_path(db_path),
        }
    }

    /// Create a new database context from a database URL.
    ///
    /// Accepts `sqlite:path/to/db.sqlite` URLs or plain file paths.
    pub fn from_url(database_url: &str) -> Result<Self, DbError> {
        validate_database_url(database_url).map_err(to_diesel_error)?;
        Ok(Self {
            pool: SqlitePool::new(database_url),
        })
    }

    /// Get an access log repository.
    pub fn access_logs(&self) -> DieselAccessLogRepository {
        DieselAccessLogRepository::new(self.pool.clone())
    }

    /// Create tables and indexes if they don't exist.
    pub async fn init_schema(&self) -> Result<(), DbError> {
        let mut conn = self.pool.get().await?;
        conn.batch_execute(
            r#"
            PRAGMA journal_mode = WAL;

            CREATE TABLE IF NOT EXISTS access_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                postal_code TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_access_logs_postal_code ON access_logs(postal_code);
            "#,
        )
        .await?;

        debug!("Schema ready at {}", self.pool.database_url());
        Ok(())
    }
}
