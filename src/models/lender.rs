//! Lender records and the query sent to a lender directory.

use serde::{Deserialize, Serialize};

use super::LoanForm;

/// A lender returned by the lender directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lender {
    /// Display name of the lender.
    pub name: String,
    /// Link to the lender's site.
    pub url: String,
}

/// The raw loan details passed to a lender directory.
///
/// A static directory ignores them; an HTTP directory forwards them as
/// query parameters so a real lender-matching service could use them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LenderQuery {
    /// Raw loan amount.
    pub amount: String,
    /// Raw annual percentage rate.
    pub apr: String,
    /// Raw repayment period in years.
    pub years: String,
    /// Raw ZIP code.
    pub zipcode: String,
}

impl From<&LoanForm> for LenderQuery {
    fn from(form: &LoanForm) -> Self {
        LenderQuery {
            amount: form.loan_amount.clone(),
            apr: form.annual_interest.clone(),
            years: form.repayment_period.clone(),
            zipcode: form.zipcode.clone(),
        }
    }
}

impl LenderQuery {
    /// Returns the query as `(name, value)` pairs for a URL query string.
    pub fn as_params(&self) -> [(&'static str, &str); 4] {
        [
            ("amount", self.amount.as_str()),
            ("apr", self.apr.as_str()),
            ("years", self.years.as_str()),
            ("zipcode", self.zipcode.as_str()),
        ]
    }
}
