//! Response types for the invoice ROI API.
//!
//! This module defines the success envelopes, the error response structure
//! and the mapping from [`RoiError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RoiError;
use crate::models::{ComputedResults, Scenario, ScenarioInputs};

/// The message returned for any failure the caller cannot act on.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Response body for `POST /simulate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Always `true`.
    pub success: bool,
    /// The coerced inputs the results were computed from.
    pub inputs: ScenarioInputs,
    /// The computed results.
    pub results: ComputedResults,
}

/// Response body for endpoints returning a single scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResponse {
    /// Always `true`.
    pub success: bool,
    /// The scenario.
    pub scenario: Scenario,
}

/// Response body for `GET /scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioListResponse {
    /// Always `true`.
    pub success: bool,
    /// Scenarios, most recent first.
    pub scenarios: Vec<Scenario>,
}

/// Response body for `DELETE /scenarios/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`.
    pub success: bool,
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a not found error response.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new("NOT_FOUND", message)
    }

    /// Creates the generic internal error response.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", GENERIC_ERROR_MESSAGE)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a response from a status and error body.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RoiError> for ApiErrorResponse {
    fn from(error: RoiError) -> Self {
        match error {
            RoiError::Validation { message, .. } => {
                Self::new(StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            RoiError::ScenarioNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Scenario not found"),
            ),
            RoiError::MalformedIdentifier { id } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_ID",
                    "Invalid scenario id",
                    format!("'{}' is not a valid scenario identifier", id),
                ),
            ),
            // Internal details are logged by the handler, never returned.
            RoiError::Storage { .. }
            | RoiError::Report { .. }
            | RoiError::ConfigNotFound { .. }
            | RoiError::ConfigParseError { .. }
            | RoiError::ConfigInvalid { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"success\":false"));
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
        assert!(json.contains("\"success\":false"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response: ApiErrorResponse = RoiError::required("scenario_name").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(response.error.message, "scenario_name is required");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = RoiError::ScenarioNotFound {
            id: "x".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "NOT_FOUND");
    }

    #[test]
    fn test_malformed_identifier_maps_to_bad_request() {
        let response: ApiErrorResponse = RoiError::MalformedIdentifier {
            id: "abc".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_ID");
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let response: ApiErrorResponse = RoiError::Storage {
            message: "lock poisoned at 0xdeadbeef".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.message, GENERIC_ERROR_MESSAGE);
        assert!(response.error.details.is_none());

        let response: ApiErrorResponse = RoiError::Report {
            message: "font table".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!response.error.message.contains("font"));
    }
}
