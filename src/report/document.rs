//! Report layout.
//!
//! A [`ReportDocument`] is the fixed textual layout of a scenario report,
//! independent of the output format. Renderers turn it into bytes.

use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::ReportConfig;
use crate::models::Scenario;

/// A labelled value in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// The label printed on the left.
    pub label: String,
    /// The formatted value printed on the right.
    pub value: String,
}

impl ReportLine {
    fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// A headed group of report lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// The section heading.
    pub heading: String,
    /// The lines in the section.
    pub lines: Vec<ReportLine>,
}

/// The complete layout of a scenario report.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use invoice_roi::calculation::compute;
/// use invoice_roi::config::ReportConfig;
/// use invoice_roi::models::{NewScenario, Scenario, ScenarioId, ScenarioInputs};
/// use invoice_roi::report::ReportDocument;
///
/// let inputs = ScenarioInputs::default();
/// let scenario = Scenario::from_new(
///     NewScenario {
///         scenario_name: "Baseline".to_string(),
///         inputs,
///         results: compute(&inputs),
///     },
///     ScenarioId::new(),
///     Utc::now(),
/// );
///
/// let document = ReportDocument::build(
///     &scenario,
///     "ap@example.com",
///     Utc::now(),
///     &ReportConfig::default(),
/// );
/// assert_eq!(document.sections.len(), 2);
/// assert!(document.disclaimer.contains("bias factor"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// The report title.
    pub title: String,
    /// Scenario name, recipient and generation time.
    pub header: Vec<ReportLine>,
    /// The "Inputs" and "Results" sections, in that order.
    pub sections: Vec<ReportSection>,
    /// The fixed disclaimer.
    pub disclaimer: String,
}

impl ReportDocument {
    /// Lays out the report for a stored scenario.
    pub fn build(
        scenario: &Scenario,
        email: &str,
        generated_at: DateTime<Utc>,
        config: &ReportConfig,
    ) -> Self {
        let inputs = &scenario.inputs;
        let results = &scenario.results;

        let header = vec![
            ReportLine::new("Scenario", scenario.scenario_name.clone()),
            ReportLine::new("Prepared for", email.to_string()),
            ReportLine::new(
                "Generated",
                generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
        ];

        let input_lines = vec![
            ReportLine::new(
                "Monthly invoice volume",
                format_number(inputs.monthly_invoice_volume),
            ),
            ReportLine::new("AP staff", format_number(inputs.num_ap_staff)),
            ReportLine::new(
                "Hours per invoice",
                format_number(inputs.avg_hours_per_invoice),
            ),
            ReportLine::new("Hourly wage", format_currency(inputs.hourly_wage)),
            ReportLine::new(
                "Manual error rate",
                format!("{}%", format_number(inputs.error_rate_manual)),
            ),
            ReportLine::new("Cost per error", format_currency(inputs.error_cost)),
            ReportLine::new(
                "Time horizon",
                format!("{} months", inputs.time_horizon_months),
            ),
            ReportLine::new(
                "Implementation cost",
                format_currency(inputs.one_time_implementation_cost),
            ),
        ];

        let result_lines = vec![
            ReportLine::new("Monthly savings", format_currency(results.monthly_savings)),
            ReportLine::new(
                "Cumulative savings",
                format_currency(results.cumulative_savings),
            ),
            ReportLine::new("Payback period", format_months(results.payback_months)),
            ReportLine::new("ROI", format_percent(results.roi_percentage)),
        ];

        Self {
            title: config.title.clone(),
            header,
            sections: vec![
                ReportSection {
                    heading: "Inputs".to_string(),
                    lines: input_lines,
                },
                ReportSection {
                    heading: "Results".to_string(),
                    lines: result_lines,
                },
            ],
            disclaimer: config.disclaimer.clone(),
        }
    }

    /// Looks up a line value by label across the header and all sections.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.header
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.lines.iter()))
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

/// Converts a finite float to a decimal rounded to `dp` places.
fn to_decimal(value: f64, dp: u32) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

/// Inserts thousands separators into the integer part of a plain decimal string.
fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(plain.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    match frac_part {
        Some(f) => format!("{grouped}.{f}"),
        None => grouped,
    }
}

fn non_finite_text(value: f64, infinite: &str) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        infinite.to_string()
    }
}

/// Formats a currency amount, e.g. `$1,227,600.00` or `-$400.00`.
pub fn format_currency(value: f64) -> String {
    let Some(mut amount) = value.is_finite().then(|| to_decimal(value, 2)).flatten() else {
        return non_finite_text(value, "N/A");
    };
    amount.rescale(2);

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}", group_thousands(&amount.abs().to_string()))
}

/// Formats a plain quantity, dropping insignificant trailing zeros.
pub fn format_number(value: f64) -> String {
    match value.is_finite().then(|| to_decimal(value, 4)).flatten() {
        Some(number) => {
            let text = number.normalize().to_string();
            match text.strip_prefix('-') {
                Some(rest) => format!("-{}", group_thousands(rest)),
                None => group_thousands(&text),
            }
        }
        None => non_finite_text(value, "N/A"),
    }
}

/// Formats a payback period; an infinite period never pays back.
pub fn format_months(value: f64) -> String {
    if value.is_finite() {
        format!("{} months", format_number(value))
    } else {
        non_finite_text(value, "Never")
    }
}

/// Formats a percentage; an infinite ROI has no meaningful value.
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", format_number(value))
    } else {
        non_finite_text(value, "N/A")
    }
}
