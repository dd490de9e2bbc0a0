//! Mapping from lookup failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::{AddressError, GeocodeError};

/// Error response returned by the address endpoints.
///
/// Serialized as `{"error": "<kind>", "message": "<text>"}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
}

impl From<AddressError> for ApiError {
    fn from(err: AddressError) -> Self {
        let (status, kind) = match &err {
            AddressError::MissingPostalCode => (StatusCode::BAD_REQUEST, "missing_parameter"),
            AddressError::Geocode(e) => match e {
                GeocodeError::InvalidEndpoint(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
                }
                GeocodeError::Transport(_) => (StatusCode::BAD_GATEWAY, "transport_error"),
                GeocodeError::UpstreamStatus { .. } => {
                    (StatusCode::BAD_GATEWAY, "upstream_status")
                }
                GeocodeError::Decode(_) => (StatusCode::BAD_GATEWAY, "decode_error"),
                GeocodeError::NoMatch { .. } => (StatusCode::NOT_FOUND, "no_match"),
            },
            AddressError::InvalidCoordinate { .. } => (StatusCode::BAD_GATEWAY, "parse_error"),
            AddressError::Persistence(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error")
            }
        };

        Self {
            status,
            kind,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind,
            message: &self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access_log::AccessLogError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AddressError::MissingPostalCode, StatusCode::BAD_REQUEST, "missing_parameter"),
            (
                GeocodeError::UpstreamStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                }
                .into(),
                StatusCode::BAD_GATEWAY,
                "upstream_status",
            ),
            (
                GeocodeError::Decode(serde_json::from_str::<u8>("{").unwrap_err()).into(),
                StatusCode::BAD_GATEWAY,
                "decode_error",
            ),
            (
                GeocodeError::NoMatch {
                    postal_code: "0000000".to_string(),
                    reason: None,
                }
                .into(),
                StatusCode::NOT_FOUND,
                "no_match",
            ),
            (
                AddressError::InvalidCoordinate {
                    axis: "x",
                    value: "east".to_string(),
                },
                StatusCode::BAD_GATEWAY,
                "parse_error",
            ),
            (
                AccessLogError::Database("disk I/O error".to_string()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "persistence_error",
            ),
        ];

        for (err, status, kind) in cases {
            let api = ApiError::from(err);
            assert_eq!(api.status, status);
            assert_eq!(api.kind, kind);
            assert!(!api.message.is_empty());
        }
    }
}
