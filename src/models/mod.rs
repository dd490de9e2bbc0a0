//! Data models for postal-distance.

mod access_log;
mod distance_query;
mod location;

pub use access_log::{AccessLogEntry, PostalCodeCount};
pub use distance_query::DistanceQueryResponse;
pub use location::{GeocodeResult, LocationInfo};
