//! Configuration types for the Loan Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section and
//! field has a default, so an empty file is a valid configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::presentation::ChartOptions;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the API listens on.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Input persistence settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the last inputs. Inputs are kept in memory when unset.
    pub path: Option<PathBuf>,
}

/// Lender directory settings.
///
/// When both `url` and `file` are set, `url` is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LenderConfig {
    /// URL of the lender list.
    pub url: Option<String>,
    /// Local JSON file holding the lender list.
    pub file: Option<PathBuf>,
    /// How long to wait for the lender list, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for LenderConfig {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            timeout_ms: 5000,
        }
    }
}

/// Chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Options passed through to the chart renderer.
    #[serde(flatten)]
    pub options: ChartOptions,
    /// Longest schedule, in months, for which chart data is produced.
    pub max_months: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            options: ChartOptions::default(),
            max_months: 12_000,
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Input persistence settings.
    pub store: StoreConfig,
    /// Lender directory settings.
    pub lenders: LenderConfig,
    /// Chart settings.
    pub chart: ChartConfig,
}
