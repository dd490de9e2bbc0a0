//! Append-only log of postal code lookups.
//!
//! Pluggable backends behind [`AccessLogStore`]:
//! - Diesel/SQLite (persisted, the default for `serve`)
//! - In-memory (ephemeral, used by tests)

mod backend;
mod memory;
mod sqlite;

pub use backend::{AccessLogError, AccessLogResult, AccessLogStore};
pub use memory::InMemoryAccessLogStore;
pub use sqlite::DieselAccessLogRepository;
