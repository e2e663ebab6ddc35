//! Core data models for the Loan Engine.
//!
//! This module contains the raw form, the parsed loan inputs, the payment
//! result, schedule entries and lender records.

mod lender;
mod loan_form;
mod loan_result;

pub use lender::{Lender, LenderQuery};
pub use loan_form::{LoanForm, LoanInputs, parse_int};
pub use loan_result::{LoanResult, ScheduleEntry};
