//! HTTP request handlers for the Surcharge Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify_with_audit, compare_implementations};
use crate::config::SurchargeRules;
use crate::error::EngineResult;
use crate::models::{AuditTrace, ClassificationResult, Shift};

use super::request::{ClassifyRequest, ClassifyTimesRequest};
use super::response::{ApiError, ApiErrorResponse, RulesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/classify/times", post(classify_times_handler))
        .route("/compare", post(compare_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Handler for POST /classify.
///
/// Accepts a shift in absolute hours and returns its surcharge breakdown.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    classify_and_respond(correlation_id, request.into_shift(state.rules()), state.rules())
}

/// Handler for POST /classify/times.
///
/// Accepts wall-clock start and end timestamps instead of absolute hours.
async fn classify_times_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyTimesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timestamp classification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    classify_and_respond(correlation_id, request.into_shift(state.rules()), state.rules())
}

/// Handler for POST /compare.
///
/// Runs the window classifier and the slot estimator side by side.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shift = match request.into_shift(state.rules()) {
        Ok(shift) => shift,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid shift");
            return error_response(err.into());
        }
    };

    let report = compare_implementations(&shift, state.rules());
    if report.is_consistent() {
        info!(correlation_id = %correlation_id, "Classifiers agree");
    } else {
        warn!(
            correlation_id = %correlation_id,
            start_hour = %shift.start_hour,
            end_hour = %shift.end_hour,
            is_holiday = shift.is_holiday,
            categories = report.differences.len(),
            total_divergence = %report.total_divergence(),
            "Classifiers diverge"
        );
    }

    json_response(StatusCode::OK, report)
}

/// Handler for GET /rules.
async fn rules_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    json_response(
        StatusCode::OK,
        RulesResponse {
            policy: config.policy().clone(),
            rules: *config.rules(),
        },
    )
}

fn classify_and_respond(
    correlation_id: Uuid,
    shift: EngineResult<Shift>,
    rules: &SurchargeRules,
) -> Response {
    let shift = match shift {
        Ok(shift) => shift,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid shift");
            return error_response(err.into());
        }
    };

    let result = perform_classification(&shift, rules);
    info!(
        correlation_id = %correlation_id,
        start_hour = %shift.start_hour,
        end_hour = %shift.end_hour,
        is_holiday = shift.is_holiday,
        total_hours = %result.totals.total_hours,
        warnings = result.audit_trace.warnings.len(),
        duration_us = result.audit_trace.duration_us,
        "Classification completed successfully"
    );
    json_response(StatusCode::OK, result)
}

/// Classifies a shift and wraps the categories in a [`ClassificationResult`].
fn perform_classification(shift: &Shift, rules: &SurchargeRules) -> ClassificationResult {
    let start_time = Instant::now();
    let classification = classify_with_audit(shift, rules, 1);
    let duration_us = start_time.elapsed().as_micros() as u64;

    ClassificationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        shift: *shift,
        categories: classification.categories,
        totals: classification.totals,
        audit_trace: AuditTrace {
            steps: classification.audit_steps,
            warnings: classification.warnings,
            duration_us,
        },
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
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

    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    json_response(api_error.status, api_error.error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
