//! Repository layer for database persistence.
//!
//! All database access uses Diesel ORM over SQLite, driven asynchronously
//! through diesel-async's `SyncConnectionWrapper`.

pub mod diesel_context;
pub mod diesel_models;
pub mod pool;
pub mod util;

pub use diesel_context::DieselDbContext;
pub use diesel_models::{AccessLogRecord, NewAccessLog};
pub use pool::{DbError, SqlitePool};

use chrono::{DateTime, Utc};

/// Parse a datetime string from the database, defaulting to Unix epoch on error.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}
