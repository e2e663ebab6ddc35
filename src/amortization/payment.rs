//! Fixed monthly payment calculation.
//!
//! This module provides the closed-form annuity formula used to derive the
//! monthly payment, total payment and total interest of a loan.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{LoanInputs, LoanResult};

/// Number of payments per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Converts an annual percentage rate into a monthly fractional rate.
///
/// # Examples
///
/// ```
/// use loan_engine::amortization::monthly_rate;
///
/// assert_eq!(monthly_rate(12.0), 0.01);
/// ```
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / (100.0 * MONTHS_PER_YEAR)
}

/// Computes the fixed monthly payment of a loan.
///
/// The payment is `principal * g * r / (g - 1)` where `r` is the monthly
/// rate and `g = (1 + r)^months`. The result is valid only when that payment
/// is a finite number; no other range check is applied. In particular a zero
/// rate makes `g - 1` zero and is rejected, as is a zero-length period.
///
/// # Arguments
///
/// * `principal` - The amount borrowed
/// * `annual_rate_percent` - The annual interest rate in percent (6 for 6%)
/// * `period_years` - The repayment period in years
///
/// # Returns
///
/// Returns a [`LoanResult`] on success, or
/// [`EngineError::InvalidInputResult`] if the payment is NaN or infinite.
///
/// # Examples
///
/// ```
/// use loan_engine::amortization::compute_payment;
///
/// let result = compute_payment(100000.0, 6.0, 30.0).unwrap();
/// assert_eq!(format!("{:.2}", result.monthly_payment), "599.55");
///
/// assert!(compute_payment(100000.0, 6.0, 0.0).is_err());
/// assert!(compute_payment(100000.0, 0.0, 30.0).is_err());
/// assert!(compute_payment(f64::NAN, 6.0, 30.0).is_err());
/// ```
pub fn compute_payment(
    principal: f64,
    annual_rate_percent: f64,
    period_years: f64,
) -> EngineResult<LoanResult> {
    let monthly_rate = monthly_rate(annual_rate_percent);
    let num_months = period_years * MONTHS_PER_YEAR;

    let growth = (1.0 + monthly_rate).powf(num_months);
    let monthly_payment = (principal * growth * monthly_rate) / (growth - 1.0);

    if !monthly_payment.is_finite() {
        debug!(
            principal,
            annual_rate_percent,
            period_years,
            monthly_payment,
            "Rejecting non-finite monthly payment"
        );
        return Err(EngineError::InvalidInputResult { monthly_payment });
    }

    let total_payment = monthly_payment * num_months;
    let total_interest = total_payment - principal;

    Ok(LoanResult {
        principal,
        monthly_rate,
        num_months,
        monthly_payment,
        total_payment,
        total_interest,
    })
}

/// Computes the fixed monthly payment for parsed [`LoanInputs`].
pub fn compute_for(inputs: &LoanInputs) -> EngineResult<LoanResult> {
    compute_payment(
        inputs.principal,
        inputs.annual_rate_percent,
        inputs.period_years,
    )
}
