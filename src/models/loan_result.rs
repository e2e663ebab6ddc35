//! Calculation result models.
//!
//! This module defines [`LoanResult`], the fixed-payment summary of a loan,
//! and [`ScheduleEntry`], one month of the amortization schedule.

use serde::{Deserialize, Serialize};

/// The payment summary for a valid loan calculation.
///
/// All amounts keep full `f64` precision; rounding to cents happens only
/// when the result is formatted for display.
///
/// # Example
///
/// ```
/// use loan_engine::amortization::compute_payment;
///
/// let result = compute_payment(100000.0, 6.0, 30.0).unwrap();
/// assert_eq!(result.num_months, 360.0);
/// assert!((result.monthly_payment - 599.55).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// The amount borrowed.
    pub principal: f64,
    /// The monthly interest rate as a fraction (annual percent / 1200).
    pub monthly_rate: f64,
    /// The number of monthly payments.
    pub num_months: f64,
    /// The fixed monthly payment.
    pub monthly_payment: f64,
    /// The sum of all monthly payments.
    pub total_payment: f64,
    /// The total payment less the principal.
    pub total_interest: f64,
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Zero-based month index; month 0 is the state before any payment.
    pub month_index: u32,
    /// Month index multiplied by the monthly payment.
    pub cumulative_interest_paid: f64,
    /// Cumulative principal repaid.
    pub equity: f64,
    /// Principal still outstanding.
    pub remaining_balance: f64,
}
