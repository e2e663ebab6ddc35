//! Chart data for the balance, equity and interest series.
//!
//! The chart itself is drawn by an external renderer. This module builds the
//! data table and options that renderer consumes, and defines the
//! [`ChartRenderer`] contract it must honor.

use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Value, json};

use crate::models::ScheduleEntry;

/// Column labels of the chart data table.
pub const CHART_HEADER: [&str; 4] = [
    "Year",
    "Total Interest Payments",
    "Total Equity",
    "Loan Balance",
];

/// Display options forwarded to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Chart title.
    pub title: String,
    /// Horizontal axis title.
    pub h_axis_title: String,
    /// Color of the horizontal axis title.
    pub h_axis_title_color: String,
    /// Default series type.
    pub series_type: String,
    /// Indices of series drawn as lines instead of the default type.
    pub line_series: Vec<u32>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Loan Balance, Cumulative Equity, and Interest Payments".to_string(),
            h_axis_title: "Month".to_string(),
            h_axis_title_color: "#333".to_string(),
            series_type: "area".to_string(),
            line_series: vec![2],
        }
    }
}

impl ChartOptions {
    /// Returns the options in the renderer's JSON shape.
    ///
    /// # Example
    ///
    /// ```
    /// use loan_engine::presentation::ChartOptions;
    ///
    /// let json = ChartOptions::default().to_json();
    /// assert_eq!(json["hAxis"]["title"], "Month");
    /// assert_eq!(json["series"]["2"]["type"], "line");
    /// ```
    pub fn to_json(&self) -> Value {
        let series: serde_json::Map<String, Value> = self
            .line_series
            .iter()
            .map(|index| (index.to_string(), json!({ "type": "line" })))
            .collect();

        json!({
            "title": self.title,
            "hAxis": {
                "minValue": 0,
                "title": self.h_axis_title,
                "titleTextStyle": { "color": self.h_axis_title_color },
            },
            "vAxis": { "minValue": 0 },
            "seriesType": self.series_type,
            "series": series,
        })
    }
}

/// One data row: month, cumulative payments, equity, balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartRow(pub u32, pub f64, pub f64, pub f64);

impl From<&ScheduleEntry> for ChartRow {
    fn from(entry: &ScheduleEntry) -> Self {
        ChartRow(
            entry.month_index,
            entry.cumulative_interest_paid,
            entry.equity,
            entry.remaining_balance,
        )
    }
}

/// The chart data table.
///
/// Serializes as an array of arrays whose first element is
/// [`CHART_HEADER`], followed by one array per row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartTable {
    /// Data rows, one per schedule entry.
    pub rows: Vec<ChartRow>,
}

impl ChartTable {
    /// Builds the table from schedule entries.
    pub fn from_schedule<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ScheduleEntry>,
    {
        Self {
            rows: entries.into_iter().map(ChartRow::from).collect(),
        }
    }

    /// Returns the table as a JSON array of arrays, header row first.
    pub fn to_data_table(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for ChartTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len() + 1))?;
        seq.serialize_element(&CHART_HEADER)?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Everything a renderer needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Display options.
    pub options: ChartOptions,
    /// Data table.
    pub table: ChartTable,
}

impl Serialize for ChartSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChartSpec", 2)?;
        state.serialize_field("options", &self.options.to_json())?;
        state.serialize_field("data", &self.table)?;
        state.end()
    }
}

/// Draws the chart.
pub trait ChartRenderer {
    /// Draws `chart`, or erases any previously drawn chart when `None`.
    fn draw(&mut self, chart: Option<&ChartSpec>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::{ScheduleIter, compute_payment};

    fn spec_for(principal: f64, rate: f64, years: f64) -> ChartSpec {
        let result = compute_payment(principal, rate, years).unwrap();
        let entries: Vec<ScheduleEntry> = ScheduleIter::from_result(&result).collect();
        ChartSpec {
            options: ChartOptions::default(),
            table: ChartTable::from_schedule(&entries),
        }
    }

    #[test]
    fn test_data_table_starts_with_header() {
        let spec = spec_for(12000.0, 12.0, 1.0);
        let data = spec.table.to_data_table();
        let rows = data.as_array().unwrap();

        assert_eq!(rows.len(), 14);
        assert_eq!(
            rows[0],
            json!(["Year", "Total Interest Payments", "Total Equity", "Loan Balance"])
        );
        assert_eq!(rows[1], json!([0, 0.0, 0.0, 12000.0]));
    }

    #[test]
    fn test_rows_mirror_schedule_entries() {
        let result = compute_payment(50000.0, 5.0, 5.0).unwrap();
        let entries: Vec<ScheduleEntry> = ScheduleIter::from_result(&result).collect();
        let table = ChartTable::from_schedule(&entries);

        for (row, entry) in table.rows.iter().zip(&entries) {
            assert_eq!(row.0, entry.month_index);
            assert_eq!(row.1, entry.cumulative_interest_paid);
            assert_eq!(row.2, entry.equity);
            assert_eq!(row.3, entry.remaining_balance);
        }
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let data = ChartTable::default().to_data_table();
        assert_eq!(data.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_default_options_json() {
        let json = ChartOptions::default().to_json();
        assert_eq!(
            json["title"],
            "Loan Balance, Cumulative Equity, and Interest Payments"
        );
        assert_eq!(json["hAxis"]["minValue"], 0);
        assert_eq!(json["hAxis"]["titleTextStyle"]["color"], "#333");
        assert_eq!(json["vAxis"]["minValue"], 0);
        assert_eq!(json["seriesType"], "area");
        assert_eq!(json["series"]["2"]["type"], "line");
    }

    #[test]
    fn test_spec_serializes_options_and_data() {
        let json = serde_json::to_value(spec_for(1000.0, 10.0, 1.0)).unwrap();
        assert_eq!(json["options"]["seriesType"], "area");
        assert_eq!(json["data"].as_array().unwrap().len(), 14);
    }
}
