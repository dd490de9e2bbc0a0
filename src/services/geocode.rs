//! Postal code lookup against the HeartRails Geo API.
//!
//! The provider answers `searchByPostal` with
//! `{"response": {"location": [...]}}`, or with
//! `{"response": {"error": "..."}}` (still HTTP 200) when nothing matches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Settings;
use crate::models::{GeocodeResult, LocationInfo};

/// Default provider endpoint.
pub const DEFAULT_GEOCODE_URL: &str = "https://geoapi.heartrails.com/api/json";

/// Errors that can occur while resolving a postal code.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Invalid geocoding endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Failed to reach geocoding provider: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Geocoding provider returned HTTP {status}")]
    UpstreamStatus { status: StatusCode },

    #[error("Malformed geocoding response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("No location found for postal code '{postal_code}'")]
    NoMatch {
        postal_code: String,
        /// Message the provider attached, if any.
        reason: Option<String>,
    },
}

/// Resolves postal codes to candidate locations.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up a postal code. An empty match list is reported as
    /// [`GeocodeError::NoMatch`], so a successful result always has a first
    /// entry.
    async fn resolve(&self, postal_code: &str) -> Result<GeocodeResult, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct GeoApiResponse {
    response: GeoApiPayload,
}

#[derive(Debug, Deserialize)]
struct GeoApiPayload {
    #[serde(default)]
    location: Vec<LocationInfo>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the geocoding provider.
///
/// One GET per lookup, no retries. The timeout covers the whole request.
#[derive(Clone)]
pub struct GeocodeClient {
    client: Client,
    endpoint: Url,
}

impl GeocodeClient {
    /// Create a client for `endpoint`.
    pub fn new(endpoint: &str, timeout: Duration, user_agent: &str) -> Result<Self, GeocodeError> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(GeocodeError::Transport)?;

        Ok(Self { client, endpoint })
    }

    /// Create a client from application settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, GeocodeError> {
        Self::new(
            &settings.geocode_url,
            Duration::from_secs(settings.request_timeout),
            &settings.user_agent,
        )
    }

    /// Provider URL for a postal code lookup. The code is percent-encoded.
    pub fn lookup_url(&self, postal_code: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("method", "searchByPostal")
            .append_pair("postal", postal_code);
        url
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn resolve(&self, postal_code: &str) -> Result<GeocodeResult, GeocodeError> {
        let url = self.lookup_url(postal_code);
        debug!("Resolving postal code {} via {}", postal_code, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(GeocodeError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GeocodeError::UpstreamStatus { status });
        }

        let body = response.bytes().await.map_err(GeocodeError::Transport)?;
        parse_response(postal_code, &body)
    }
}

/// Decode a provider response body.
pub fn parse_response(postal_code: &str, body: &[u8]) -> Result<GeocodeResult, GeocodeError> {
    let parsed: GeoApiResponse = serde_json::from_slice(body).map_err(GeocodeError::Decode)?;
    let payload = parsed.response;

    if payload.location.is_empty() {
        return Err(GeocodeError::NoMatch {
            postal_code: postal_code.to_string(),
            reason: payload.error,
        });
    }

    debug!(
        "Postal code {} matched {} location(s)",
        postal_code,
        payload.location.len()
    );
    Ok(GeocodeResult::new(payload.location))
}
