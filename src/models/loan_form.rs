//! Raw form fields and the numeric loan inputs parsed from them.
//!
//! This module defines the [`LoanForm`] struct holding the four raw input
//! strings, the [`LoanInputs`] struct consumed by the amortization engine,
//! and [`parse_int`], which turns a raw field into a number.

use serde::{Deserialize, Serialize};

/// The four raw input fields as entered by the user.
///
/// Field names serialize under the same keys used for persistence, so a
/// form round-trips unchanged through both the API and the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanForm {
    /// The loan amount, e.g. "100000".
    #[serde(rename = "loanAmount", default)]
    pub loan_amount: String,
    /// The annual interest rate in percent, e.g. "6".
    #[serde(rename = "annualInt", default)]
    pub annual_interest: String,
    /// The repayment period in years, e.g. "30".
    #[serde(rename = "repaymentPeriod", default)]
    pub repayment_period: String,
    /// The ZIP code, passed through to the lender lookup unvalidated.
    #[serde(default)]
    pub zipcode: String,
}

impl LoanForm {
    /// Creates a form from the four raw field values.
    pub fn new(
        loan_amount: impl Into<String>,
        annual_interest: impl Into<String>,
        repayment_period: impl Into<String>,
        zipcode: impl Into<String>,
    ) -> Self {
        Self {
            loan_amount: loan_amount.into(),
            annual_interest: annual_interest.into(),
            repayment_period: repayment_period.into(),
            zipcode: zipcode.into(),
        }
    }

    /// Parses the three numeric fields into [`LoanInputs`].
    ///
    /// Parsing never fails: a field without leading digits becomes NaN,
    /// which the engine later rejects through its finiteness check.
    ///
    /// # Examples
    ///
    /// ```
    /// use loan_engine::models::LoanForm;
    ///
    /// let inputs = LoanForm::new("100000", "6", "30", "10001").to_inputs();
    /// assert_eq!(inputs.principal, 100000.0);
    /// assert_eq!(inputs.annual_rate_percent, 6.0);
    /// assert_eq!(inputs.period_years, 30.0);
    ///
    /// let bad = LoanForm::new("abc", "6", "30", "").to_inputs();
    /// assert!(bad.principal.is_nan());
    /// ```
    pub fn to_inputs(&self) -> LoanInputs {
        LoanInputs {
            principal: parse_int(&self.loan_amount),
            annual_rate_percent: parse_int(&self.annual_interest),
            period_years: parse_int(&self.repayment_period),
        }
    }
}

/// Numeric loan parameters consumed by the amortization engine.
///
/// Values are integers stored as `f64`, and may be NaN when the source field
/// held no digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// The amount borrowed.
    pub principal: f64,
    /// The annual interest rate in percent.
    pub annual_rate_percent: f64,
    /// The repayment period in years.
    pub period_years: f64,
}

impl LoanInputs {
    /// Creates loan inputs from already-numeric values.
    pub fn new(principal: f64, annual_rate_percent: f64, period_years: f64) -> Self {
        Self {
            principal,
            annual_rate_percent,
            period_years,
        }
    }

    /// Returns true if all three values are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.principal.is_finite()
            && self.annual_rate_percent.is_finite()
            && self.period_years.is_finite()
    }
}

/// Returns true for the characters skipped before a number: the
/// ECMAScript white space and line terminator set.
fn is_leading_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parses the leading integer of a string.
///
/// Leading whitespace (including the byte order mark, excluding U+0085) is
/// skipped, an optional `+`/`-` sign is accepted, and a
/// `0x`/`0X` prefix switches to base 16. Digits are consumed until the first
/// character that is not a digit in the active base; anything after that is
/// ignored. Returns NaN if no digit was consumed.
///
/// # Examples
///
/// ```
/// use loan_engine::models::parse_int;
///
/// assert_eq!(parse_int("  42abc"), 42.0);
/// assert_eq!(parse_int("-7"), -7.0);
/// assert_eq!(parse_int("0x1A"), 26.0);
/// assert_eq!(parse_int("6.5"), 6.0);
/// assert!(parse_int("").is_nan());
/// assert!(parse_int("abc").is_nan());
/// ```
pub fn parse_int(field: &str) -> f64 {
    let mut rest = field.trim_start_matches(is_leading_whitespace);

    let negative = match rest.as_bytes().first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let radix = if rest.starts_with("0x") || rest.starts_with("0X") {
        rest = &rest[2..];
        16
    } else {
        10
    };

    let mut value = 0.0_f64;
    let mut digits = 0usize;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        value = value * f64::from(radix) + f64::from(digit);
        digits += 1;
    }

    if digits == 0 {
        return f64::NAN;
    }

    if negative { -value } else { value }
}
