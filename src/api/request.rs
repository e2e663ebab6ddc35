//! Request types for the Loan Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::LoanForm;

/// A raw form field as sent by a client.
///
/// Browsers send field values as strings, but API clients often send plain
/// numbers. Both are accepted and handed to the engine as text so that
/// parsing is identical either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    /// A string value, passed through verbatim.
    Text(String),
    /// A JSON number, converted to its textual form.
    Number(serde_json::Number),
}

impl Default for RawField {
    fn default() -> Self {
        RawField::Text(String::new())
    }
}

impl From<RawField> for String {
    fn from(field: RawField) -> Self {
        match field {
            RawField::Text(text) => text,
            RawField::Number(number) => number.to_string(),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Uses the same field names as the persisted form. Missing fields are
/// treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The loan amount.
    #[serde(rename = "loanAmount", default)]
    pub loan_amount: RawField,
    /// The annual interest rate in percent.
    #[serde(rename = "annualInt", default)]
    pub annual_interest: RawField,
    /// The repayment period in years.
    #[serde(rename = "repaymentPeriod", default)]
    pub repayment_period: RawField,
    /// The ZIP code.
    #[serde(default)]
    pub zipcode: RawField,
}

impl From<CalculationRequest> for LoanForm {
    fn from(req: CalculationRequest) -> Self {
        LoanForm {
            loan_amount: req.loan_amount.into(),
            annual_interest: req.annual_interest.into(),
            repayment_period: req.repayment_period.into(),
            zipcode: req.zipcode.into(),
        }
    }
}
