//! Response body for a distance lookup.

use serde::{Deserialize, Serialize};

/// Summary returned for a postal code lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceQueryResponse {
    /// Canonical postal code from the provider, not the one the client sent.
    pub postal_code: String,
    pub hit_count: usize,
    pub address: String,
    /// Kilometers to Tokyo Station, one decimal place.
    pub tokyo_sta_distance: f64,
}
