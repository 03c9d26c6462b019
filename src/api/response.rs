//! Response types for the payroll engine API.
//!
//! This module defines the error response structures, the error mapping
//! from core failures, and the success payloads that are not plain
//! domain models.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{EmployeeReport, ProcessedPayroll};

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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        match &error {
            PayrollError::InvalidArgument { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(error.to_string()),
            },
            PayrollError::NotFound { query } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "EMPLOYEE_NOT_FOUND",
                    error.to_string(),
                    format!("No employee on the roster matches {}", query),
                ),
            },
        }
    }
}

/// Response body for `GET /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReportResponse {
    /// The number of records reported.
    pub count: usize,
    /// One entry per record, in insertion order.
    pub employees: Vec<EmployeeReport>,
}

/// Response body for `DELETE /employees/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveEmployeeResponse {
    /// The identifier the removal targeted.
    pub employee_id: i64,
    /// Whether a record was actually removed.
    pub removed: bool,
}

/// Response body for `POST /payroll/process`: one processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunResponse {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the run.
    pub engine_version: String,
    /// One entry per record, in insertion order.
    pub processed: Vec<ProcessedPayroll>,
    /// Sum of all processed payroll figures.
    pub total_gross: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_bad_request() {
        let response: ApiErrorResponse =
            PayrollError::invalid_argument("salary", "cannot be negative").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert!(response.error.message.contains("salary"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = PayrollError::NotFound {
            query: "id 42".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
        assert_eq!(response.error.message, "Employee not found: id 42");
    }

    #[test]
    fn test_api_error_omits_absent_details() {
        let error = ApiError::validation_error("bad input");
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("details"));
    }
}
