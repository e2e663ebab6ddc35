//! Error types for the Loan Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating a loan,
//! persisting inputs, or looking up lenders.

use thiserror::Error;

/// The main error type for the Loan Engine.
///
/// Only [`EngineError::InvalidInputResult`] is produced by the amortization
/// core. The remaining variants belong to the collaborators around it
/// (configuration, persistence, lender lookup).
///
/// # Example
///
/// ```
/// use loan_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The parsed loan inputs produced a non-finite monthly payment.
    #[error("Loan inputs produce a non-finite monthly payment ({monthly_payment})")]
    InvalidInputResult {
        /// The computed (non-finite) payment value.
        monthly_payment: f64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The key/value store could not read or write a value.
    #[error("Persistence error for key '{key}': {message}")]
    PersistenceError {
        /// The key being read or written.
        key: String,
        /// A description of the failure.
        message: String,
    },

    /// The lender directory could not be fetched or decoded.
    #[error("Lender lookup failed for '{location}': {message}")]
    LenderLookupFailed {
        /// The URL or file the lenders were requested from.
        location: String,
        /// A description of the failure.
        message: String,
    },

    /// The lender lookup task was cancelled before it completed.
    #[error("Lender lookup was cancelled")]
    LookupCancelled,
}

impl EngineError {
    /// Returns true if this error means "clear all derived display state".
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EngineError::InvalidInputResult { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
