//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{RoiError, RoiResult};

use super::types::{CalculatorConstants, MAX_LIST_LIMIT, ReportConfig, Settings};

/// Loads and provides access to service settings.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "0.0.0.0:3000"
/// calculator:
///   automated_cost_per_invoice: 0.20
///   error_rate_auto: 0.1
///   bias_factor: 1.1
/// scenarios:
///   list_limit: 50
/// report:
///   title: "Invoicing ROI Report"
///   disclaimer: "..."
/// ```
///
/// # Example
///
/// ```no_run
/// use invoice_roi::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roi.yaml").unwrap();
/// println!("Listening on {}", loader.settings().server.bind_address);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    settings: Settings,
}

impl ConfigLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown calculator keys (`ConfigParseError`)
    /// - The file changes a fixed value (`ConfigInvalid`), see [`Settings::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> RoiResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RoiError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&path_str, &content)
    }

    /// Wraps settings after checking their fixed values.
    pub fn from_settings(settings: Settings) -> RoiResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    fn parse(path: &str, content: &str) -> RoiResult<Self> {
        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings =
            serde_yaml::from_str::<Settings>(content).map_err(|e| RoiError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        Self::from_settings(settings)
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the calculator constants.
    pub fn calculator(&self) -> &CalculatorConstants {
        &self.settings.calculator
    }

    /// Returns the report layout settings.
    pub fn report(&self) -> &ReportConfig {
        &self.settings.report
    }

    /// Returns the maximum number of scenarios a listing returns.
    pub fn list_limit(&self) -> usize {
        self.settings.scenarios.list_limit.min(MAX_LIST_LIMIT)
    }

    /// Overrides the bind address, e.g. from a command-line flag.
    pub fn with_bind_address(mut self, bind_address: impl Into<String>) -> Self {
        self.settings.server.bind_address = bind_address.into();
        self
    }
}
