//! Computed ROI results.
//!
//! This module contains [`ComputedResults`], the derived savings metrics
//! produced by the calculator.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Savings metrics derived from a set of [`ScenarioInputs`](super::ScenarioInputs).
///
/// Every field is rounded to two decimal places. `payback_months` and
/// `roi_percentage` may be positive infinity when there is nothing to pay
/// back. JSON has no infinity, so non-finite values are written as `null`;
/// reading `null` back for those two fields restores positive infinity.
///
/// # Example
///
/// ```
/// use invoice_roi::models::ComputedResults;
///
/// let results = ComputedResults {
///     labor_cost_manual: 0.0,
///     auto_cost: 0.0,
///     error_savings: 0.0,
///     monthly_savings: 1.1,
///     cumulative_savings: 39.6,
///     net_savings: 39.6,
///     payback_months: f64::INFINITY,
///     roi_percentage: f64::INFINITY,
/// };
///
/// let json = serde_json::to_value(&results).unwrap();
/// assert!(json["payback_months"].is_null());
///
/// let back: ComputedResults = serde_json::from_value(json).unwrap();
/// assert!(back.payback_months.is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedResults {
    /// Monthly labor cost of manual processing.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_nan")]
    pub labor_cost_manual: f64,
    /// Monthly cost of automated processing.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_nan")]
    pub auto_cost: f64,
    /// Monthly savings from fewer processing errors.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_nan")]
    pub error_savings: f64,
    /// Monthly savings after the bias factor and floor have been applied.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_nan")]
    pub monthly_savings: f64,
    /// Savings accumulated over the whole time horizon.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_nan")]
    pub cumulative_savings: f64,
    /// Cumulative savings less the one-time implementation cost.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_nan")]
    pub net_savings: f64,
    /// Months until the implementation cost is recovered.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_infinity")]
    pub payback_months: f64,
    /// Return on the implementation cost, in percent.
    #[serde(serialize_with = "finite_or_null", deserialize_with = "null_as_infinity")]
    pub roi_percentage: f64,
}

fn finite_or_null<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

fn null_as_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

fn null_as_infinity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}
