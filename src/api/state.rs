//! Application state for the Loan Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculator::Calculator;

/// Shared application state.
///
/// Holds the calculator, which in turn owns the input store and the
/// lender directory shared across all requests.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<Calculator>,
}

impl AppState {
    /// Creates a new application state around the given calculator.
    pub fn new(calculator: Calculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }

    /// Returns a reference to the calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
