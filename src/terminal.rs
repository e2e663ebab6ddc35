//! Plain-text presentation for the command line.

use loan_engine::models::Lender;
use loan_engine::presentation::{
    CHART_HEADER, ChartRenderer, ChartSpec, PaymentDisplay, ResultsPanel, format_currency,
};

/// Prints payment results and lenders to stdout.
pub struct TerminalPanel;

impl ResultsPanel for TerminalPanel {
    fn show_payment(&mut self, display: &PaymentDisplay) {
        if display.is_cleared() {
            println!("The loan inputs do not produce a monthly payment.");
            return;
        }
        println!("Monthly payment: {:>14}", display.monthly_payment);
        println!("Total payment:   {:>14}", display.total_payment);
        println!("Total interest:  {:>14}", display.total_interest);
    }

    fn show_lenders(&mut self, lenders: Option<&[Lender]>) {
        let Some(lenders) = lenders.filter(|l| !l.is_empty()) else {
            return;
        };
        println!();
        println!("Lenders:");
        for lender in lenders {
            println!("  {} <{}>", lender.name, lender.url);
        }
    }
}

/// Prints the schedule as a table with one row per year.
pub struct TerminalChart;

impl ChartRenderer for TerminalChart {
    fn draw(&mut self, chart: Option<&ChartSpec>) {
        let Some(chart) = chart else {
            return;
        };
        let last_month = chart.table.rows.last().map_or(0, |row| row.0);

        println!();
        println!("{}", chart.options.title);
        println!(
            "{:>6} {:>24} {:>16} {:>16}",
            CHART_HEADER[0], CHART_HEADER[1], CHART_HEADER[2], CHART_HEADER[3]
        );
        for row in chart
            .table
            .rows
            .iter()
            .filter(|row| row.0 % 12 == 0 || row.0 == last_month)
        {
            println!(
                "{:>6} {:>24} {:>16} {:>16}",
                format!("{:.1}", f64::from(row.0) / 12.0),
                format_currency(row.1),
                format_currency(row.2),
                format_currency(row.3)
            );
        }
    }
}
