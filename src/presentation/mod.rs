//! Presentation of calculation results.
//!
//! This module turns engine output into what the presentation layer shows:
//! two-decimal currency strings, chart data and options, and lender links.
//! It also defines the [`ResultsPanel`] and [`ChartRenderer`] contracts that
//! a concrete front end implements.

mod chart;
mod currency;
mod panel;

pub use chart::{CHART_HEADER, ChartOptions, ChartRenderer, ChartRow, ChartSpec, ChartTable};
pub use currency::{PaymentDisplay, format_currency};
pub use panel::{ResultsPanel, lender_links_html};
