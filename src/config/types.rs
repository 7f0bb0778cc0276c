//! Configuration types for the invoice ROI service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML settings file. Every section is optional
//! and falls back to its default.

use serde::Deserialize;

use crate::error::{RoiError, RoiResult};

/// Upper bound on the number of scenarios a listing returns.
pub const MAX_LIST_LIMIT: usize = 50;

/// Fixed constants the calculator reads.
///
/// Fields are private: once built at startup the constants can only be read,
/// and no request type carries them.
///
/// # Example
///
/// ```
/// use invoice_roi::config::CalculatorConstants;
///
/// let constants = CalculatorConstants::default();
/// assert_eq!(constants.automated_cost_per_invoice(), 0.20);
/// assert_eq!(constants.error_rate_auto(), 0.1);
/// assert_eq!(constants.bias_factor(), 1.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConstants {
    automated_cost_per_invoice: f64,
    error_rate_auto: f64,
    bias_factor: f64,
}

impl CalculatorConstants {
    /// Cost of processing one invoice automatically.
    pub fn automated_cost_per_invoice(&self) -> f64 {
        self.automated_cost_per_invoice
    }

    /// Error rate of automated processing, in percent units.
    pub fn error_rate_auto(&self) -> f64 {
        self.error_rate_auto
    }

    /// Multiplier applied to monthly savings.
    pub fn bias_factor(&self) -> f64 {
        self.bias_factor
    }
}

impl Default for CalculatorConstants {
    fn default() -> Self {
        Self {
            automated_cost_per_invoice: 0.20,
            error_rate_auto: 0.1,
            bias_factor: 1.1,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Scenario listing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScenariosConfig {
    /// Maximum number of scenarios returned by a listing. Values above
    /// [`MAX_LIST_LIMIT`] are clamped.
    pub list_limit: usize,
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        Self {
            list_limit: MAX_LIST_LIMIT,
        }
    }
}

/// Report layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Title printed at the top of every report.
    pub title: String,
    /// Disclaimer printed at the bottom of every report.
    pub disclaimer: String,
}

/// The disclaimer printed when none is configured.
pub const DEFAULT_DISCLAIMER: &str = "Results include an internal bias factor that favors \
automation outcomes. Figures are estimates only.";

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Invoicing ROI Report".to_string(),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Calculator constants.
    pub calculator: CalculatorConstants,
    /// Scenario listing settings.
    pub scenarios: ScenariosConfig,
    /// Report layout settings.
    pub report: ReportConfig,
}

impl Settings {
    /// Checks the values the service treats as fixed.
    ///
    /// The calculator constants must equal [`CalculatorConstants::default`]
    /// and the disclaimer must disclose the bias factor. The file may restate
    /// these values but never change them.
    pub fn validate(&self) -> RoiResult<()> {
        let canonical = CalculatorConstants::default();
        if self.calculator != canonical {
            return Err(RoiError::ConfigInvalid {
                field: "calculator".to_string(),
                message: format!(
                    "constants are fixed at automated_cost_per_invoice={}, \
                     error_rate_auto={}, bias_factor={}",
                    canonical.automated_cost_per_invoice(),
                    canonical.error_rate_auto(),
                    canonical.bias_factor()
                ),
            });
        }

        if !self.report.disclaimer.to_lowercase().contains("bias") {
            return Err(RoiError::ConfigInvalid {
                field: "report.disclaimer".to_string(),
                message: "the disclaimer must disclose the bias factor".to_string(),
            });
        }

        Ok(())
    }
}
