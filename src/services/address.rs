//! Postal code lookup: geocode, measure, log.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use super::distance::ReferencePoint;
use super::geocode::{GeocodeError, Geocoder};
use crate::access_log::{AccessLogError, AccessLogStore};
use crate::models::{DistanceQueryResponse, GeocodeResult, PostalCodeCount};

/// Errors from an address lookup.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("postal_code is required")]
    MissingPostalCode,

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error("Geocoding provider returned a non-numeric {axis} coordinate: '{value}'")]
    InvalidCoordinate { axis: &'static str, value: String },

    #[error("Access log unavailable: {0}")]
    Persistence(#[from] AccessLogError),
}

/// Resolves postal codes and reports their distance from a reference point.
///
/// Every successful lookup is appended to the access log. The write is
/// best-effort: a failing store never fails the lookup.
#[derive(Clone)]
pub struct AddressService {
    geocoder: Arc<dyn Geocoder>,
    access_logs: Arc<dyn AccessLogStore>,
    reference: ReferencePoint,
}

impl AddressService {
    pub fn new(geocoder: Arc<dyn Geocoder>, access_logs: Arc<dyn AccessLogStore>) -> Self {
        Self {
            geocoder,
            access_logs,
            reference: ReferencePoint::TOKYO_STATION,
        }
    }

    /// Measure distances against `reference` instead of Tokyo Station.
    pub fn with_reference(mut self, reference: ReferencePoint) -> Self {
        self.reference = reference;
        self
    }

    /// Resolve `postal_code` and summarise the first match.
    pub async fn lookup(&self, postal_code: &str) -> Result<DistanceQueryResponse, AddressError> {
        if postal_code.is_empty() {
            return Err(AddressError::MissingPostalCode);
        }

        let result = self.geocoder.resolve(postal_code).await.inspect_err(|e| {
            warn!("Geocoding failed for postal code {}: {}", postal_code, e);
        })?;
        let response = summarize(postal_code, &result, &self.reference)?;

        match self.access_logs.record(postal_code).await {
            Ok(entry) => debug!("Recorded access log #{} for {}", entry.id, postal_code),
            Err(e) => warn!("Failed to record access log for {}: {}", postal_code, e),
        }

        Ok(response)
    }

    /// Request counts per postal code, highest first.
    pub async fn access_logs(&self) -> Result<Vec<PostalCodeCount>, AddressError> {
        Ok(self.access_logs.count_by_postal_code().await?)
    }
}

/// Build the response for a geocoding result.
pub fn summarize(
    postal_code: &str,
    result: &GeocodeResult,
    reference: &ReferencePoint,
) -> Result<DistanceQueryResponse, AddressError> {
    let first = result.first().ok_or_else(|| GeocodeError::NoMatch {
        postal_code: postal_code.to_string(),
        reason: None,
    })?;

    let x = parse_coordinate("x", &first.x)?;
    let y = parse_coordinate("y", &first.y)?;

    Ok(DistanceQueryResponse {
        postal_code: first.postal.clone(),
        hit_count: result.hit_count(),
        address: first.address(),
        tokyo_sta_distance: reference.distance(x, y),
    })
}

fn parse_coordinate(axis: &'static str, value: &str) -> Result<f64, AddressError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AddressError::InvalidCoordinate {
            axis,
            value: value.to_string(),
        }),
    }
}
