//! Scenario input model.
//!
//! This module contains [`ScenarioInputs`], the raw business parameters a user
//! supplies for an ROI estimate, together with the lenient field coercion used
//! when inputs arrive from a browser form.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The default evaluation horizon in months.
pub const DEFAULT_TIME_HORIZON_MONTHS: i64 = 36;

/// Operational parameters for an ROI estimate.
///
/// Every numeric field is coerced leniently on deserialization: numbers are
/// taken as-is, numeric strings are parsed, and anything else (absent, `null`,
/// unparseable text) falls back to the field default. The default is `0`
/// for every field except `time_horizon_months`, which defaults to `36`.
///
/// # Example
///
/// ```
/// use invoice_roi::models::ScenarioInputs;
///
/// let inputs: ScenarioInputs = serde_json::from_str(
///     r#"{"monthly_invoice_volume": "2000", "num_ap_staff": 3, "hourly_wage": null}"#,
/// ).unwrap();
///
/// assert_eq!(inputs.monthly_invoice_volume, 2000.0);
/// assert_eq!(inputs.num_ap_staff, 3.0);
/// assert_eq!(inputs.hourly_wage, 0.0);
/// assert_eq!(inputs.time_horizon_months, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInputs {
    /// Invoices processed per month.
    #[serde(deserialize_with = "lenient_f64")]
    pub monthly_invoice_volume: f64,
    /// Number of accounts-payable staff.
    #[serde(deserialize_with = "lenient_f64")]
    pub num_ap_staff: f64,
    /// Average hours spent per invoice.
    #[serde(deserialize_with = "lenient_f64")]
    pub avg_hours_per_invoice: f64,
    /// Hourly wage of AP staff.
    #[serde(deserialize_with = "lenient_f64")]
    pub hourly_wage: f64,
    /// Manual error rate in percent units (0.5 means 0.5%).
    #[serde(deserialize_with = "lenient_f64")]
    pub error_rate_manual: f64,
    /// Cost of fixing a single error.
    #[serde(deserialize_with = "lenient_f64")]
    pub error_cost: f64,
    /// Evaluation horizon in months.
    #[serde(deserialize_with = "lenient_horizon")]
    pub time_horizon_months: i64,
    /// One-time cost of implementing automation.
    #[serde(deserialize_with = "lenient_f64")]
    pub one_time_implementation_cost: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            monthly_invoice_volume: 0.0,
            num_ap_staff: 0.0,
            avg_hours_per_invoice: 0.0,
            hourly_wage: 0.0,
            error_rate_manual: 0.0,
            error_cost: 0.0,
            time_horizon_months: DEFAULT_TIME_HORIZON_MONTHS,
            one_time_implementation_cost: 0.0,
        }
    }
}

/// Coerces an arbitrary JSON value to a finite float.
///
/// Returns `None` when the value is not a number or a numeric string.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value).unwrap_or(0.0))
}

fn lenient_horizon<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let months = coerce_number(&value).map(|n| n.trunc() as i64).unwrap_or(0);
    if months == 0 {
        Ok(DEFAULT_TIME_HORIZON_MONTHS)
    } else {
        Ok(months)
    }
}
