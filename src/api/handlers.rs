//! HTTP request handlers for the Loan Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::amortization::compute_for;
use crate::lenders::LenderLookup;
use crate::models::{LenderQuery, LoanForm, LoanResult};
use crate::presentation::PaymentDisplay;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payment", post(payment_handler))
        .route("/inputs", get(inputs_handler))
        .route("/lenders", get(lenders_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a JSON body rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::new("VALIDATION_ERROR", body_text)
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

/// Handler for POST /calculate endpoint.
///
/// Runs a full calculation. Invalid loan inputs are not a request error:
/// they return 200 with a cleared view.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let form: LoanForm = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let view = state.calculator().calculate(&form).await;
    info!(
        correlation_id = %correlation_id,
        calculation_id = %view.calculation_id,
        valid = view.result.is_some(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed"
    );

    json_response(StatusCode::OK, CalculationResponse::from(view))
}

/// Response body for the `/payment` endpoint.
#[derive(Debug, Serialize)]
struct PaymentResponse {
    display: PaymentDisplay,
    result: LoanResult,
}

/// Handler for POST /payment endpoint.
///
/// Computes the payment only, without persistence, chart or lenders.
/// Invalid loan inputs are reported as 422.
async fn payment_handler(payload: Result<Json<CalculationRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();

    let form: LoanForm = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match compute_for(&form.to_inputs()) {
        Ok(result) => json_response(
            StatusCode::OK,
            PaymentResponse {
                display: PaymentDisplay::from_result(&result),
                result,
            },
        ),
        Err(err) => {
            info!(correlation_id = %correlation_id, error = %err, "Payment rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /inputs endpoint.
///
/// Returns the last persisted form for prefilling inputs.
async fn inputs_handler(State(state): State<AppState>) -> Response {
    match state.calculator().prefill() {
        Ok(form) => json_response(StatusCode::OK, form),
        Err(err) => {
            warn!(error = %err, "Failed to read persisted inputs");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /lenders endpoint.
///
/// Queries the configured lender directory directly. Unlike `/calculate`,
/// a failing directory is reported to the caller.
async fn lenders_handler(
    State(state): State<AppState>,
    Query(query): Query<LenderQuery>,
) -> Response {
    let Some(directory) = state.calculator().lender_directory() else {
        return json_response(
            StatusCode::NOT_FOUND,
            ApiError::new("LENDERS_DISABLED", "No lender directory is configured"),
        );
    };

    let lookup = LenderLookup::spawn(directory, query);
    match lookup.join_timeout(state.calculator().lender_timeout()).await {
        Ok(lenders) => json_response(StatusCode::OK, lenders),
        Err(err) => {
            warn!(error = %err, "Lender lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
