//! Response types for the Loan Engine API.
//!
//! This module defines the calculation response body and the error
//! response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculator::CalculatorView;
use crate::error::EngineError;
use crate::models::{Lender, LoanResult};
use crate::presentation::{ChartSpec, PaymentDisplay, lender_links_html};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The formatted payment strings, empty when the inputs were invalid.
    pub display: PaymentDisplay,
    /// The full-precision result.
    pub result: Option<LoanResult>,
    /// Chart options and data table.
    pub chart: Option<ChartSpec>,
    /// Affiliated lenders.
    pub lenders: Option<Vec<Lender>>,
    /// Affiliated lenders rendered as a list of links.
    pub lenders_html: Option<String>,
}

impl From<CalculatorView> for CalculationResponse {
    fn from(view: CalculatorView) -> Self {
        let lenders_html = view.lenders.as_deref().map(lender_links_html);
        Self {
            calculation_id: view.calculation_id,
            timestamp: view.computed_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            display: view.display,
            result: view.result,
            chart: view.chart,
            lenders: view.lenders,
            lenders_html,
        }
    }
}

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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidInputResult { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    "The loan amount, rate and period do not produce a payment",
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::PersistenceError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Input store unavailable", message),
            },
            EngineError::LenderLookupFailed { .. } | EngineError::LookupCancelled => {
                ApiErrorResponse {
                    status: StatusCode::BAD_GATEWAY,
                    error: ApiError::with_details(
                        "LENDER_LOOKUP_FAILED",
                        "Lender directory unavailable",
                        message,
                    ),
                }
            }
        }
    }
}
