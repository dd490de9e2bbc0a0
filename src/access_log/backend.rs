//! Storage trait for the access log.

use async_trait::async_trait;

use crate::models::{AccessLogEntry, PostalCodeCount};

/// Result type for access log operations.
pub type AccessLogResult<T> = Result<T, AccessLogError>;

/// Errors from access log backend operations.
#[derive(Debug, thiserror::Error)]
pub enum AccessLogError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl From<diesel::result::Error> for AccessLogError {
    fn from(e: diesel::result::Error) -> Self {
        AccessLogError::Database(e.to_string())
    }
}

/// Storage backend for access log entries.
///
/// Entries are only ever appended. Implementations must be safe to share
/// between concurrently running requests.
#[async_trait]
pub trait AccessLogStore: Send + Sync {
    /// Append an entry for `postal_code`, timestamped now.
    async fn record(&self, postal_code: &str) -> AccessLogResult<AccessLogEntry>;

    /// Request counts per postal code, highest count first.
    /// Ties are ordered by postal code.
    async fn count_by_postal_code(&self) -> AccessLogResult<Vec<PostalCodeCount>>;

    /// Total number of entries.
    async fn count(&self) -> AccessLogResult<u64>;
}
