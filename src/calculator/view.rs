//! The state produced by one calculation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Lender, LoanResult};
use crate::presentation::{ChartRenderer, ChartSpec, PaymentDisplay, ResultsPanel};

/// Everything the presentation layer shows after a calculation.
///
/// `None` fields mean "clear": an invalid calculation yields a view with an
/// empty display, no chart and no lender list, replacing whatever was shown
/// before.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorView {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub computed_at: DateTime<Utc>,
    /// The formatted payment strings.
    pub display: PaymentDisplay,
    /// The full-precision result, if the inputs were valid.
    pub result: Option<LoanResult>,
    /// Chart data, if the inputs were valid.
    pub chart: Option<ChartSpec>,
    /// Affiliated lenders, if the lookup succeeded.
    pub lenders: Option<Vec<Lender>>,
}

impl CalculatorView {
    /// Returns the view shown for invalid inputs.
    pub fn cleared() -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            display: PaymentDisplay::cleared(),
            result: None,
            chart: None,
            lenders: None,
        }
    }

    /// Returns true if this view clears every result.
    pub fn is_cleared(&self) -> bool {
        self.display.is_cleared()
            && self.result.is_none()
            && self.chart.is_none()
            && self.lenders.is_none()
    }

    /// Pushes the view to a results panel and a chart renderer.
    pub fn render<P, C>(&self, panel: &mut P, chart: &mut C)
    where
        P: ResultsPanel + ?Sized,
        C: ChartRenderer + ?Sized,
    {
        panel.show_payment(&self.display);
        panel.show_lenders(self.lenders.as_deref());
        chart.draw(self.chart.as_ref());
    }
}
