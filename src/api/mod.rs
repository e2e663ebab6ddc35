//! HTTP API module for the Loan Engine.
//!
//! This module provides the REST API endpoints for calculating loan
//! payments, reading back persisted inputs and listing lenders.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RawField};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
