//! Request types for the invoice ROI API.
//!
//! `POST /simulate` takes a bare [`ScenarioInputs`] body; the types here cover
//! the endpoints that carry more than inputs.

use serde::{Deserialize, Serialize};

use crate::error::{RoiError, RoiResult};
use crate::models::ScenarioInputs;

/// Request body for `POST /scenarios`.
///
/// The input fields sit alongside `scenario_name` at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveScenarioRequest {
    /// Display name for the scenario. Required.
    #[serde(default)]
    pub scenario_name: Option<String>,
    /// The scenario inputs.
    #[serde(flatten)]
    pub inputs: ScenarioInputs,
}

impl SaveScenarioRequest {
    /// Returns the trimmed scenario name, or a validation error if it is absent or blank.
    pub fn validated_name(&self) -> RoiResult<String> {
        required_text(self.scenario_name.as_deref(), "scenario_name")
    }
}

/// Request body for `POST /report/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Identifier of the stored scenario. Required.
    #[serde(default)]
    pub scenario_id: Option<String>,
    /// Recipient email address. Required.
    #[serde(default)]
    pub email: Option<String>,
}

impl ReportRequest {
    /// Returns the trimmed `(scenario_id, email)` pair, validating both are present.
    pub fn validated(&self) -> RoiResult<(String, String)> {
        let email = required_text(self.email.as_deref(), "email")?;
        let scenario_id = required_text(self.scenario_id.as_deref(), "scenario_id")?;
        Ok((scenario_id, email))
    }
}

fn required_text(value: Option<&str>, field: &str) -> RoiResult<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(RoiError::required(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_request_reads_flat_inputs() {
        let json = r#"{
            "scenario_name": "Baseline",
            "monthly_invoice_volume": 2000,
            "hourly_wage": "30"
        }"#;
        let request: SaveScenarioRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.validated_name().unwrap(), "Baseline");
        assert_eq!(request.inputs.monthly_invoice_volume, 2000.0);
        assert_eq!(request.inputs.hourly_wage, 30.0);
        assert_eq!(request.inputs.time_horizon_months, 36);
    }

    #[test]
    fn test_save_request_missing_name_is_validation_error() {
        let request: SaveScenarioRequest =
            serde_json::from_str(r#"{"monthly_invoice_volume": 10}"#).unwrap();
        let err = request.validated_name().unwrap_err();

        assert!(matches!(err, RoiError::Validation { field, .. } if field == "scenario_name"));
    }

    #[test]
    fn test_save_request_blank_name_is_validation_error() {
        let request: SaveScenarioRequest =
            serde_json::from_str(r#"{"scenario_name": "   "}"#).unwrap();
        assert!(request.validated_name().is_err());
    }

    #[test]
    fn test_save_request_name_is_trimmed() {
        let request: SaveScenarioRequest =
            serde_json::from_str(r#"{"scenario_name": "  Pilot  "}"#).unwrap();
        assert_eq!(request.validated_name().unwrap(), "Pilot");
    }

    #[test]
    fn test_report_request_requires_email() {
        let request = ReportRequest {
            scenario_id: Some("abc".to_string()),
            email: None,
        };
        let err = request.validated().unwrap_err();
        assert!(matches!(err, RoiError::Validation { field, .. } if field == "email"));
    }

    #[test]
    fn test_report_request_requires_scenario_id() {
        let request = ReportRequest {
            scenario_id: Some(" ".to_string()),
            email: Some("ap@example.com".to_string()),
        };
        let err = request.validated().unwrap_err();
        assert!(matches!(err, RoiError::Validation { field, .. } if field == "scenario_id"));
    }

    #[test]
    fn test_report_request_valid() {
        let request: ReportRequest =
            serde_json::from_str(r#"{"scenario_id": "id-1", "email": "ap@example.com"}"#)
                .unwrap();
        assert_eq!(
            request.validated().unwrap(),
            ("id-1".to_string(), "ap@example.com".to_string())
        );
    }
}
