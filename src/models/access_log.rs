//! Access log models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded `/address` lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub id: i32,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
}

/// Number of recorded lookups for a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeCount {
    pub postal_code: String,
    pub request_count: u64,
}

impl PostalCodeCount {
    pub fn new(postal_code: impl Into<String>, request_count: u64) -> Self {
        Self {
            postal_code: postal_code.into(),
            request_count,
        }
    }
}
