//! Response types for the salary draft API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::DraftError;
use crate::models::{SalaryAmounts, SalaryField, SalaryTotals};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
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
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
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
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A `400 Bad Request` carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DraftError> for ApiErrorResponse {
    fn from(error: DraftError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            DraftError::ConfigNotFound { .. } | DraftError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            DraftError::EmployeeNotSelected => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "EMPLOYEE_NOT_SELECTED",
                    message,
                    "The employee_id field must not be empty",
                ),
            ),
            DraftError::EmployeeNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            DraftError::DirectoryUnavailable { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("DIRECTORY_UNAVAILABLE", message),
            ),
            DraftError::InvalidAmounts { .. } => {
                (StatusCode::BAD_REQUEST, ApiError::validation_error(message))
            }
            DraftError::SubmissionInFlight => (
                StatusCode::CONFLICT,
                ApiError::new("SUBMISSION_IN_FLIGHT", message),
            ),
            DraftError::DraftClosed => (StatusCode::CONFLICT, ApiError::new("DRAFT_CLOSED", message)),
            DraftError::CreateRejected { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("CREATE_REJECTED", message),
            ),
            DraftError::AmountOutOfRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("AMOUNT_OUT_OF_RANGE", message),
            ),
            DraftError::TotalsMismatch { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "TOTALS_MISMATCH",
                    message,
                    "Derived totals must equal the sums of the submitted amounts",
                ),
            ),
            DraftError::SalaryNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("SALARY_NOT_FOUND", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

/// Response body for `POST /salaries/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// The amounts as read, unreadable entries as zero.
    pub amounts: SalaryAmounts,
    /// Totals derived from `amounts`.
    pub totals: SalaryTotals,
    /// Fields whose entry could not be read, with the reason.
    pub field_errors: BTreeMap<SalaryField, String>,
}
