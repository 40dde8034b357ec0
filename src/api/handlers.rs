//! HTTP request handlers for the salary draft API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{DraftError, DraftResult};
use crate::form::SalaryForm;
use crate::models::{CreateSalaryRequest, PayPeriod, SalaryFilters};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", get(get_employee_handler))
        .route(
            "/salaries",
            post(create_salary_handler).get(list_salaries_handler),
        )
        .route("/salaries/calculate", post(calculate_handler))
        .route("/salaries/:id", get(get_salary_handler))
        .with_state(state)
}

/// Maps a body rejection onto the JSON error shape.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}

fn error_response(correlation_id: Uuid, err: DraftError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Handler for POST /salaries/calculate.
///
/// Reads raw amount entries the way the form does and returns the derived
/// totals along with any entries that could not be read.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_calculation(&request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                fields = request.amounts.len(),
                invalid_fields = response.field_errors.len(),
                gross_salary = %response.totals.gross_salary,
                net_salary = %response.totals.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn perform_calculation(request: &CalculationRequest) -> DraftResult<CalculationResponse> {
    let mut form = SalaryForm::new(PayPeriod::current());
    for (field, raw) in &request.amounts {
        form.set_amount(*field, &raw.as_text())?;
    }

    Ok(CalculationResponse {
        amounts: form.draft().amounts().clone(),
        totals: form.totals().clone(),
        field_errors: form
            .field_errors()
            .iter()
            .map(|(field, err)| (*field, err.to_string()))
            .collect(),
    })
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let employees = state.directory().all();
    info!(count = employees.len(), "Listing employees");
    (StatusCode::OK, Json(employees)).into_response()
}

/// Handler for GET /employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.directory().find(&id) {
        Some(employee) => (StatusCode::OK, Json(employee)).into_response(),
        None => error_response(correlation_id, DraftError::EmployeeNotFound { id }),
    }
}

/// Handler for POST /salaries.
///
/// Stores a draft salary payload after re-checking its totals.
async fn create_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateSalaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary create request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.ledger().create(request) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                salary_id = %record.id,
                employee_id = %record.employee_id,
                "Salary created"
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /salaries.
async fn list_salaries_handler(
    State(state): State<AppState>,
    filters: Result<Query<SalaryFilters>, QueryRejection>,
) -> Response {
    let filters = match filters {
        Ok(Query(filters)) => filters,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "Invalid salary filters");
            return ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            ))
            .into_response();
        }
    };

    let records = state.ledger().list(&filters);
    (StatusCode::OK, Json(records)).into_response()
}

/// Handler for GET /salaries/:id.
async fn get_salary_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let Ok(id) = Uuid::parse_str(&id) else {
        return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
            "Invalid salary id: {}",
            id
        )))
        .into_response();
    };

    match state.ledger().get(id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}
