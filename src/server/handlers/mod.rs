//! HTTP request handlers for the web server.

mod address;
mod api;
mod error;

pub use address::{access_logs, address, AccessLogsResponse};
pub use api::health;
pub use error::ApiError;
