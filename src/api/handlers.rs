//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{Employee, EmployeeReport};

use super::request::{AddEmployeeRequest, NameQuery};
use super::response::{
    ApiError, ApiErrorResponse, PayrollRunResponse, RemoveEmployeeResponse, RosterReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(add_employee_handler).get(find_by_name_handler),
        )
        .route(
            "/employees/:id",
            get(find_by_id_handler).delete(remove_employee_handler),
        )
        .route("/payroll", get(display_payroll_handler))
        .route("/payroll/process", post(process_payroll_handler))
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Constructs the requested employee variant and appends it to the
/// roster. Field validation failures are reported as 400 responses.
async fn add_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add employee request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Construct the employee; this is where field validation happens
    let employee = match Employee::try_from(request) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee construction rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let report = EmployeeReport::from(&employee);
    let mut roster = state.roster().lock().await;
    roster.add(employee);
    info!(
        correlation_id = %correlation_id,
        employee_id = report.profile.employee_id,
        payroll = %report.payroll,
        roster_size = roster.len(),
        "Employee added"
    );

    (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

/// Handler for GET /employees/{id}.
async fn find_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = id, "Searching employee by id");

    let roster = state.roster().lock().await;
    match roster.find_by_id(id) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Search by id failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /employees?name=.
async fn find_by_name_handler(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        name = %params.name,
        "Searching employee by name"
    );

    let roster = state.roster().lock().await;
    match roster.find_by_name(&params.name) {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Search by name failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for DELETE /employees/{id}.
///
/// Removes the first matching record. An absent identifier is a no-op,
/// reported through the `removed` flag rather than an error.
async fn remove_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let mut roster = state.roster().lock().await;
    let removed = roster.remove(id).is_some();
    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        removed,
        roster_size = roster.len(),
        "Processed remove request"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(RemoveEmployeeResponse {
            employee_id: id,
            removed,
        }),
    )
        .into_response()
}

/// Handler for GET /payroll.
///
/// Reports every record's description and payroll figure in insertion
/// order.
async fn display_payroll_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let roster = state.roster().lock().await;
    let employees = roster.display_all();
    info!(
        correlation_id = %correlation_id,
        count = employees.len(),
        "Produced payroll display"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(RosterReportResponse {
            count: employees.len(),
            employees,
        }),
    )
        .into_response()
}

/// Handler for POST /payroll/process.
///
/// Recomputes every record's payroll figure and frames the pass as a
/// processing run with its own identity.
async fn process_payroll_handler(State(state): State<AppState>) -> impl IntoResponse {
    let run_id = Uuid::new_v4();

    let roster = state.roster().lock().await;
    let processed = roster.process_all();
    let total_gross: Decimal = processed.iter().map(|p| p.payroll).sum();
    info!(
        run_id = %run_id,
        count = processed.len(),
        total_gross = %total_gross,
        "Processed payroll run"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PayrollRunResponse {
            run_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            processed,
            total_gross,
        }),
    )
        .into_response()
}
