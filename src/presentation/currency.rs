//! Currency formatting and the payment display strings.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::LoanResult;

/// Formats an amount with exactly two decimal places.
///
/// Rounding is applied to the exact binary value of `value`, with midpoints
/// rounded away from zero. Values outside the `Decimal` range fall back to
/// plain float formatting.
///
/// # Examples
///
/// ```
/// use loan_engine::presentation::format_currency;
///
/// assert_eq!(format_currency(599.5505251527569), "599.55");
/// assert_eq!(format_currency(500.0), "500.00");
/// assert_eq!(format_currency(0.125), "0.13");
/// ```
pub fn format_currency(value: f64) -> String {
    // -0.0 prints as 0.00
    let value = if value == 0.0 { 0.0 } else { value };

    match Decimal::from_f64_retain(value) {
        Some(amount) => {
            let mut rounded =
                amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        None => format!("{:.2}", value),
    }
}

/// The three result strings shown to the user.
///
/// Either all three hold a formatted amount or all three are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDisplay {
    /// The fixed monthly payment.
    pub monthly_payment: String,
    /// The sum of all payments.
    pub total_payment: String,
    /// The total interest paid.
    pub total_interest: String,
}

impl PaymentDisplay {
    /// Formats a computed result.
    pub fn from_result(result: &LoanResult) -> Self {
        Self {
            monthly_payment: format_currency(result.monthly_payment),
            total_payment: format_currency(result.total_payment),
            total_interest: format_currency(result.total_interest),
        }
    }

    /// Returns the display with all three fields empty.
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Returns true if the display holds no values.
    pub fn is_cleared(&self) -> bool {
        self.monthly_payment.is_empty()
            && self.total_payment.is_empty()
            && self.total_interest.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::compute_payment;

    #[test]
    fn test_known_loan_display() {
        let result = compute_payment(100000.0, 6.0, 30.0).unwrap();
        let display = PaymentDisplay::from_result(&result);

        assert_eq!(display.monthly_payment, "599.55");
        assert_eq!(display.total_payment, "215838.19");
        assert_eq!(display.total_interest, "115838.19");
        assert!(!display.is_cleared());
    }

    #[test]
    fn test_always_two_decimals() {
        assert_eq!(format_currency(0.0), "0.00");
        assert_eq!(format_currency(-0.0), "0.00");
        assert_eq!(format_currency(12.5), "12.50");
        assert_eq!(format_currency(1234567.891), "1234567.89");
    }

    #[test]
    fn test_rounds_the_binary_value() {
        // 1.005 and 2.675 are stored just below the midpoint
        assert_eq!(format_currency(1.005), "1.00");
        assert_eq!(format_currency(2.675), "2.67");
        // 0.125 and 0.375 are exact midpoints
        assert_eq!(format_currency(0.125), "0.13");
        assert_eq!(format_currency(0.375), "0.38");
    }

    #[test]
    fn test_negative_amounts_round_away_from_zero() {
        assert_eq!(format_currency(-0.125), "-0.13");
        assert_eq!(format_currency(-8106.6), "-8106.60");
    }

    #[test]
    fn test_out_of_range_falls_back_to_float_formatting() {
        assert_eq!(format_currency(1e30), format!("{:.2}", 1e30));
    }

    #[test]
    fn test_cleared_display_is_empty() {
        let display = PaymentDisplay::cleared();
        assert!(display.is_cleared());
        assert_eq!(display.monthly_payment, "");
    }
}
