//! Configuration loading and management for the invoice ROI service.
//!
//! Settings are read once at startup from a YAML file and shared read-only
//! with every request handler.
//!
//! # Example
//!
//! ```no_run
//! use invoice_roi::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roi.yaml").unwrap();
//! println!("Bias factor: {}", config.calculator().bias_factor());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CalculatorConstants, DEFAULT_DISCLAIMER, MAX_LIST_LIMIT, ReportConfig, ScenariosConfig,
    ServerConfig, Settings,
};
