//! Address lookup and access log endpoints.

use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::super::AppState;
use super::error::ApiError;
use crate::models::{DistanceQueryResponse, PostalCodeCount};

/// Body of `GET /address/access_logs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessLogsResponse {
    pub access_logs: Vec<PostalCodeCount>,
}

/// Resolve the `postal_code` query parameter and report its distance to Tokyo Station.
///
/// Only the first `postal_code` in the query string is used.
pub async fn address(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<DistanceQueryResponse>, ApiError> {
    let postal_code = query
        .as_deref()
        .and_then(|q| first_param(q, "postal_code"))
        .unwrap_or_default();

    let response = state.address.lookup(&postal_code).await?;
    Ok(Json(response))
}

/// Request counts per postal code, most requested first.
pub async fn access_logs(
    State(state): State<AppState>,
) -> Result<Json<AccessLogsResponse>, ApiError> {
    let access_logs = state.address.access_logs().await?;
    Ok(Json(AccessLogsResponse { access_logs }))
}

fn first_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_param() {
        assert_eq!(
            first_param("postal_code=100-0014&postal_code=0600000", "postal_code").as_deref(),
            Some("100-0014")
        );
        assert_eq!(
            first_param("a=1&postal_code=%E3%80%92100", "postal_code").as_deref(),
            Some("〒100")
        );
        assert_eq!(first_param("postal_code", "postal_code").as_deref(), Some(""));
        assert!(first_param("zip=1000014", "postal_code").is_none());
    }
}
