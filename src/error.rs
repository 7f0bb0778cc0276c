//! Error types for the invoice ROI service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service layers can report. The calculator itself
//! is total and never produces one of these.

use thiserror::Error;

/// The main error type for the invoice ROI service.
///
/// # Example
///
/// ```
/// use invoice_roi::error::RoiError;
///
/// let error = RoiError::ScenarioNotFound {
///     id: "0b7f5f0e-9a0e-4a43-9d43-2a3c2f0f5c11".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Scenario not found: 0b7f5f0e-9a0e-4a43-9d43-2a3c2f0f5c11"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RoiError {
    /// A required request field was missing or blank.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// A human-readable description of the problem.
        message: String,
    },

    /// The referenced scenario does not exist.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The identifier that did not resolve.
        id: String,
    },

    /// The identifier cannot address the scenario key space.
    #[error("Malformed scenario identifier: {id}")]
    MalformedIdentifier {
        /// The identifier as supplied by the caller.
        id: String,
    },

    /// The scenario store failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// The report could not be rendered.
    #[error("Report rendering failed: {message}")]
    Report {
        /// A description of the rendering failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the service cannot run with.
    #[error("Invalid configuration value '{field}': {message}")]
    ConfigInvalid {
        /// The offending setting, as a dotted path.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

impl RoiError {
    /// Creates a validation error for a missing or blank required field.
    pub fn required(field: &str) -> Self {
        RoiError::Validation {
            field: field.to_string(),
            message: format!("{} is required", field),
        }
    }

    /// Returns true for errors that are the caller's fault (4xx class).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RoiError::Validation { .. }
                | RoiError::ScenarioNotFound { .. }
                | RoiError::MalformedIdentifier { .. }
        )
    }
}

/// A type alias for Results that return RoiError.
pub type RoiResult<T> = Result<T, RoiError>;
