//! Configuration loading and management for the Loan Engine.
//!
//! This module loads the engine configuration from a YAML file: the server
//! bind address, where inputs are persisted, where lenders come from, and
//! how the chart is presented.
//!
//! # Example
//!
//! ```no_run
//! use loan_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/loan-engine.yaml").unwrap();
//! println!("Lenders from: {}", loader.lender_source().unwrap().location());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, ChartConfig, LenderConfig, ServerConfig, StoreConfig};
