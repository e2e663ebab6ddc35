//! Calculation orchestration.
//!
//! [`Calculator`] wires the amortization engine to its collaborators: it
//! persists valid inputs, builds the chart data and runs the lender lookup
//! alongside it, then returns the resulting [`CalculatorView`].

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::amortization::{build_schedule, compute_for};
use crate::config::{ChartConfig, ConfigLoader};
use crate::error::EngineResult;
use crate::lenders::{LenderDirectory, LenderLookup, LenderSource};
use crate::models::{LenderQuery, LoanForm, LoanResult};
use crate::persistence::{KeyValueStore, load_form, save_form};
use crate::presentation::{ChartSpec, ChartTable, PaymentDisplay};

use super::CalculatorView;

/// Runs loan calculations against a store and an optional lender directory.
pub struct Calculator<D: LenderDirectory = LenderSource> {
    store: Arc<dyn KeyValueStore>,
    lenders: Option<Arc<D>>,
    lender_timeout: Duration,
    chart: ChartConfig,
}

impl Calculator<LenderSource> {
    /// Builds a calculator from loaded configuration.
    pub fn from_config(loader: &ConfigLoader) -> EngineResult<Self> {
        let source = loader.lender_source()?;
        let store = loader.open_store();

        let mut calculator = Calculator::new(store, loader.config().chart.clone());
        if source.is_enabled() {
            info!(lenders = %source.location(), "Lender lookup enabled");
            calculator = calculator.with_lenders(source, loader.lender_timeout());
        }
        Ok(calculator)
    }
}

impl<D: LenderDirectory> Calculator<D> {
    /// Creates a calculator with no lender directory.
    pub fn new(store: Arc<dyn KeyValueStore>, chart: ChartConfig) -> Self {
        Self {
            store,
            lenders: None,
            lender_timeout: Duration::from_secs(5),
            chart,
        }
    }

    /// Attaches a lender directory, waiting at most `timeout` for it.
    pub fn with_lenders(mut self, directory: D, timeout: Duration) -> Self {
        self.lenders = Some(Arc::new(directory));
        self.lender_timeout = timeout;
        self
    }

    /// Returns the lender directory, if one is attached.
    pub fn lender_directory(&self) -> Option<Arc<D>> {
        self.lenders.clone()
    }

    /// Returns how long a lender lookup may take.
    pub fn lender_timeout(&self) -> Duration {
        self.lender_timeout
    }

    /// Reads the last persisted form, for prefilling inputs.
    pub fn prefill(&self) -> EngineResult<LoanForm> {
        load_form(self.store.as_ref())
    }

    /// Performs a calculation for the raw form fields.
    ///
    /// Invalid inputs yield [`CalculatorView::cleared`] and leave the store
    /// untouched. For valid inputs the form is persisted, the lender lookup
    /// is started, and the chart is built while it runs. Store and lender
    /// failures are logged and otherwise ignored.
    pub async fn calculate(&self, form: &LoanForm) -> CalculatorView {
        let inputs = form.to_inputs();
        let result = match compute_for(&inputs) {
            Ok(result) => result,
            Err(err) => {
                debug!(error = %err, "Clearing results for invalid loan inputs");
                return CalculatorView::cleared();
            }
        };

        if let Err(err) = save_form(self.store.as_ref(), form) {
            warn!(error = %err, "Failed to persist loan inputs");
        }

        let lookup = self
            .lenders
            .as_ref()
            .map(|directory| LenderLookup::spawn(Arc::clone(directory), LenderQuery::from(form)));

        let chart = self.chart_for(&result);

        let lenders = match lookup {
            Some(lookup) => match lookup.join_timeout(self.lender_timeout).await {
                Ok(lenders) => Some(lenders),
                Err(err) => {
                    warn!(error = %err, "Lender lookup failed, hiding lender list");
                    None
                }
            },
            None => None,
        };

        info!(
            principal = result.principal,
            num_months = result.num_months,
            monthly_payment = result.monthly_payment,
            lenders = lenders.as_ref().map_or(0, Vec::len),
            "Loan calculated"
        );

        CalculatorView {
            calculation_id: Uuid::new_v4(),
            computed_at: Utc::now(),
            display: PaymentDisplay::from_result(&result),
            result: Some(result),
            chart,
            lenders,
        }
    }

    fn chart_for(&self, result: &LoanResult) -> Option<ChartSpec> {
        if result.num_months > f64::from(self.chart.max_months) {
            warn!(
                num_months = result.num_months,
                max_months = self.chart.max_months,
                "Schedule too long to chart"
            );
            return None;
        }

        let schedule = build_schedule(
            result.principal,
            result.monthly_rate,
            result.monthly_payment,
            result.num_months,
        );

        Some(ChartSpec {
            options: self.chart.options.clone(),
            table: ChartTable::from_schedule(&schedule),
        })
    }
}
