//! Repository utilities.

use diesel::result::DatabaseErrorInformation;

/// Simple error info wrapper for database errors.
#[derive(Debug)]
pub struct DbErrorInfo(pub String);

impl DatabaseErrorInformation for DbErrorInfo {
    fn message(&self) -> &str {
        &self.0
    }
    fn details(&self) -> Option<&str> {
        None
    }
    fn hint(&self) -> Option<&str> {
        None
    }
    fn table_name(&self) -> Option<&str> {
        None
    }
    fn column_name(&self) -> Option<&str> {
        None
    }
    fn constraint_name(&self) -> Option<&str> {
        None
    }
    fn statement_position(&self) -> Option<i32> {
        None
    }
}

/// Convert any displayable error to a diesel error with proper message.
pub fn to_diesel_error(e: impl std::fmt::Display) -> diesel::result::Error {
    diesel::result::Error::DatabaseError(
        diesel::result::DatabaseErrorKind::Unknown,
        Box::new(DbErrorInfo(e.to_string())),
    )
}

/// Check if a database URL points at a server backend rather than SQLite.
pub fn is_server_url(url: &str) -> bool {
    ["postgres://", "postgresql://", "mysql://"]
        .iter()
        .any(|scheme| url.starts_with(scheme))
}

/// Validate a database URL. Only SQLite URLs and plain file paths are supported.
pub fn validate_database_url(url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("Database URL is empty".to_string());
    }
    if is_server_url(url) {
        return Err(format!(
            "Unsupported database URL '{}': only SQLite (sqlite:path or a file path) is supported",
            url.split("://").next().unwrap_or(url)
        ));
    }
    Ok(())
}
