//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file and building the collaborators it
//! describes.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::lenders::{FileLenderDirectory, HttpLenderDirectory, LenderSource};
use crate::persistence::{FileStore, KeyValueStore, MemoryStore};

use super::types::AppConfig;

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   bind: "127.0.0.1:8080"
/// store:
///   path: ./data/inputs.json
/// lenders:
///   file: ./config/lenders.json
///   timeout_ms: 5000
/// chart:
///   title: "Loan Balance, Cumulative Equity, and Interest Payments"
///   max_months: 12000
/// ```
///
/// Every key is optional.
///
/// # Example
///
/// ```no_run
/// use loan_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/loan-engine.yaml")?;
/// println!("Listening on {}", loader.config().server.bind);
/// # Ok::<(), loan_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for [`AppConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml(content: &str) -> EngineResult<Self> {
        // an empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = serde_yaml::from_str::<AppConfig>(content).map_err(|e| {
            EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns how long to wait for the lender list.
    pub fn lender_timeout(&self) -> Duration {
        Duration::from_millis(self.config.lenders.timeout_ms)
    }

    /// Builds the configured lender directory.
    pub fn lender_source(&self) -> EngineResult<LenderSource> {
        let lenders = &self.config.lenders;
        if let Some(url) = &lenders.url {
            return Ok(LenderSource::Http(HttpLenderDirectory::new(
                url.clone(),
                self.lender_timeout(),
            )?));
        }
        if let Some(file) = &lenders.file {
            return Ok(LenderSource::File(FileLenderDirectory::new(file)));
        }
        Ok(LenderSource::Disabled)
    }

    /// Opens the configured input store.
    ///
    /// A store file that cannot be read is logged and replaced by an
    /// in-memory store, so inputs are simply not kept across restarts.
    pub fn open_store(&self) -> Arc<dyn KeyValueStore> {
        match &self.config.store.path {
            Some(path) => match FileStore::open(path) {
                Ok(store) => Arc::new(store),
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "Input store unavailable, keeping inputs in memory"
                    );
                    Arc::new(MemoryStore::new())
                }
            },
            None => Arc::new(MemoryStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_bundled_config() {
        let loader = ConfigLoader::load("./config/loan-engine.yaml").unwrap();
        let config = loader.config();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(
            config.lenders.file.as_deref(),
            Some(Path::new("./config/lenders.json"))
        );
        assert_eq!(config.chart.options.h_axis_title, "Month");
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        match ConfigLoader::load("/nonexistent/loan-engine.yaml") {
            Err(EngineError::ConfigNotFound { path }) => {
                assert_eq!(path, "/nonexistent/loan-engine.yaml");
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "server: [unclosed").unwrap();

        match ConfigLoader::load(&path) {
            Err(EngineError::ConfigParseError { path: reported, .. }) => {
                assert_eq!(reported, path.display().to_string());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let loader = ConfigLoader::from_yaml("").unwrap();
        let config = loader.config();

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.store.path, None);
        assert_eq!(config.lenders.timeout_ms, 5000);
        assert_eq!(config.chart.max_months, 12_000);
        assert_eq!(config.chart.options.series_type, "area");
        assert!(!loader.lender_source().unwrap().is_enabled());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let loader = ConfigLoader::from_yaml(
            "chart:\n  title: Mortgage\n  max_months: 600\nlenders:\n  timeout_ms: 250\n",
        )
        .unwrap();
        let config = loader.config();

        assert_eq!(config.chart.options.title, "Mortgage");
        assert_eq!(config.chart.options.h_axis_title, "Month");
        assert_eq!(config.chart.max_months, 600);
        assert_eq!(loader.lender_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_url_takes_precedence_over_file() {
        let loader = ConfigLoader::from_yaml(
            "lenders:\n  url: http://localhost:9/data.json\n  file: ./config/lenders.json\n",
        )
        .unwrap();
        match loader.lender_source().unwrap() {
            LenderSource::Http(dir) => assert_eq!(dir.url(), "http://localhost:9/data.json"),
            other => panic!("Expected Http source, got {:?}", other),
        }
    }

    #[test]
    fn test_open_store_uses_file_when_configured() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inputs.json");
        let loader = ConfigLoader::from_yaml(&format!("store:\n  path: {}\n", path.display()))
            .unwrap();

        let store = loader.open_store();
        store.set("zipcode", "10001").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_unreadable_store_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // a directory exists at the store path but cannot be read as a file
        let loader =
            ConfigLoader::from_yaml(&format!("store:\n  path: {}\n", dir.path().display()))
                .unwrap();

        let store = loader.open_store();
        store.set("zipcode", "10001").unwrap();
        assert_eq!(store.get("zipcode").unwrap().as_deref(), Some("10001"));
    }
}
