//! Loan calculation service.
//!
//! This module ties the pure amortization engine to persistence, the lender
//! directory and chart data, and returns an explicit [`CalculatorView`] for
//! the presentation layer instead of mutating shared display state.

mod service;
mod view;

pub use service::Calculator;
pub use view::CalculatorView;
