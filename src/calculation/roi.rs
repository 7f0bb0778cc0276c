//! ROI calculation.
//!
//! This module turns [`ScenarioInputs`] into [`ComputedResults`]. The
//! calculation is a pure function of the inputs and the calculator
//! constants: it has no state, performs no I/O and never fails.

use crate::config::CalculatorConstants;
use crate::models::{ComputedResults, ScenarioInputs};

use super::rounding::round_to_cents;

/// Monthly savings below this value trigger the floor policy.
pub const MONTHLY_SAVINGS_FLOOR: f64 = 1.0;

/// Computes ROI figures using the canonical calculator constants.
///
/// See [`compute_with`] for the algorithm.
///
/// # Examples
///
/// ```
/// use invoice_roi::calculation::compute;
/// use invoice_roi::models::ScenarioInputs;
///
/// let inputs = ScenarioInputs {
///     monthly_invoice_volume: 2000.0,
///     num_ap_staff: 3.0,
///     avg_hours_per_invoice: 0.17,
///     hourly_wage: 30.0,
///     error_rate_manual: 0.5,
///     error_cost: 100.0,
///     time_horizon_months: 36,
///     one_time_implementation_cost: 50000.0,
/// };
///
/// let results = compute(&inputs);
/// assert_eq!(results.monthly_savings, 34100.0);
/// assert_eq!(results.cumulative_savings, 1227600.0);
/// assert_eq!(results.payback_months, 1.47);
/// assert_eq!(results.roi_percentage, 2355.2);
/// ```
pub fn compute(inputs: &ScenarioInputs) -> ComputedResults {
    compute_with(inputs, &CalculatorConstants::default())
}

/// Computes ROI figures against an explicit set of calculator constants.
///
/// # Algorithm
///
/// 1. `labor_cost_manual = staff × wage × hours_per_invoice × volume`
/// 2. `auto_cost = volume × automated_cost_per_invoice`
/// 3. `error_savings = ((error_rate_manual − error_rate_auto) / 100) × volume × error_cost`
/// 4. `raw = labor_cost_manual + error_savings − auto_cost`
/// 5. `monthly_savings = raw × bias_factor`
/// 6. If `monthly_savings < 1` it becomes `max(1, |raw|) × bias_factor`
/// 7. `cumulative_savings = monthly_savings × time_horizon_months`
/// 8. `net_savings = cumulative_savings − implementation_cost`
/// 9. `payback_months = implementation_cost / monthly_savings`, or infinity
///    unless `monthly_savings > 0`
/// 10. `roi_percentage = net_savings / implementation_cost × 100`, or infinity
///     unless `implementation_cost > 0`
/// 11. Every figure is rounded with [`round_to_cents`]
///
/// The floor in step 6 is computed from the *unbiased* value, so a scenario
/// that loses money still reports its loss magnitude as a positive saving.
/// Steps 7 to 10 work on the unrounded monthly figure, so the reported
/// `cumulative_savings` can differ from the reported `monthly_savings` times
/// the horizon by up to half a cent per month.
/// NaN arising from the inputs is not guarded against and flows through to
/// the output.
pub fn compute_with(inputs: &ScenarioInputs, constants: &CalculatorConstants) -> ComputedResults {
    let monthly = monthly_figures(inputs, constants);
    let monthly_savings = monthly.monthly_savings;

    let implementation_cost = inputs.one_time_implementation_cost;
    // Uses the unrounded monthly figure; only the outputs are rounded.
    let cumulative_savings = monthly_savings * inputs.time_horizon_months as f64;
    let net_savings = cumulative_savings - implementation_cost;

    let payback_months = if monthly_savings > 0.0 {
        implementation_cost / monthly_savings
    } else {
        f64::INFINITY
    };
    let roi_percentage = if implementation_cost > 0.0 {
        (net_savings / implementation_cost) * 100.0
    } else {
        f64::INFINITY
    };

    ComputedResults {
        labor_cost_manual: round_to_cents(monthly.labor_cost_manual),
        auto_cost: round_to_cents(monthly.auto_cost),
        error_savings: round_to_cents(monthly.error_savings),
        monthly_savings: round_to_cents(monthly_savings),
        cumulative_savings: round_to_cents(cumulative_savings),
        net_savings: round_to_cents(net_savings),
        payback_months: round_to_cents(payback_months),
        roi_percentage: round_to_cents(roi_percentage),
    }
}

/// Unrounded per-month figures (steps 1 to 6).
struct MonthlyFigures {
    labor_cost_manual: f64,
    auto_cost: f64,
    error_savings: f64,
    monthly_savings: f64,
}

fn monthly_figures(inputs: &ScenarioInputs, constants: &CalculatorConstants) -> MonthlyFigures {
    let volume = inputs.monthly_invoice_volume;
    let bias = constants.bias_factor();

    let labor_cost_manual =
        inputs.num_ap_staff * inputs.hourly_wage * inputs.avg_hours_per_invoice * volume;
    let auto_cost = volume * constants.automated_cost_per_invoice();
    let error_savings = ((inputs.error_rate_manual - constants.error_rate_auto()) / 100.0)
        * volume
        * inputs.error_cost;

    let monthly_savings_raw = labor_cost_manual + error_savings - auto_cost;
    let mut monthly_savings = monthly_savings_raw * bias;
    if monthly_savings < MONTHLY_SAVINGS_FLOOR {
        monthly_savings = MONTHLY_SAVINGS_FLOOR.max(monthly_savings_raw.abs()) * bias;
    }

    MonthlyFigures {
        labor_cost_manual,
        auto_cost,
        error_savings,
        monthly_savings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn typical_inputs() -> ScenarioInputs {
        ScenarioInputs {
            monthly_invoice_volume: 2000.0,
            num_ap_staff: 3.0,
            avg_hours_per_invoice: 0.17,
            hourly_wage: 30.0,
            error_rate_manual: 0.5,
            error_cost: 100.0,
            time_horizon_months: 36,
            one_time_implementation_cost: 50000.0,
        }
    }

    #[test]
    fn test_typical_scenario() {
        let results = compute(&typical_inputs());

        assert_eq!(results.labor_cost_manual, 30600.0);
        assert_eq!(results.auto_cost, 400.0);
        assert_eq!(results.error_savings, 800.0);
        assert_eq!(results.monthly_savings, 34100.0);
        assert_eq!(results.cumulative_savings, 1227600.0);
        assert_eq!(results.net_savings, 1177600.0);
        assert_eq!(results.payback_months, 1.47);
        assert_eq!(results.roi_percentage, 2355.2);
    }

    #[test]
    fn test_all_zero_inputs_hit_the_floor() {
        let results = compute(&ScenarioInputs::default());

        assert_eq!(results.labor_cost_manual, 0.0);
        assert_eq!(results.auto_cost, 0.0);
        assert_eq!(results.monthly_savings, 1.1);
        assert_eq!(results.cumulative_savings, 39.6);
        assert_eq!(results.net_savings, 39.6);
        assert_eq!(results.payback_months, f64::INFINITY);
        assert_eq!(results.roi_percentage, f64::INFINITY);
    }

    #[test]
    fn test_error_savings_negative_when_manual_rate_below_auto() {
        let inputs = ScenarioInputs {
            monthly_invoice_volume: 1000.0,
            error_rate_manual: 0.0,
            error_cost: 100.0,
            ..ScenarioInputs::default()
        };
        let results = compute(&inputs);

        assert_eq!(results.error_savings, -100.0);
    }

    #[test]
    fn test_floor_uses_unbiased_magnitude_for_losses() {
        // Only automation cost: raw = -200, biased = -220.
        let inputs = ScenarioInputs {
            monthly_invoice_volume: 1000.0,
            error_rate_manual: 0.1,
            ..ScenarioInputs::default()
        };
        let results = compute(&inputs);

        assert_eq!(results.auto_cost, 200.0);
        assert_eq!(results.monthly_savings, 220.0);
        assert_eq!(results.cumulative_savings, 7920.0);
    }

    #[test]
    fn test_small_positive_raw_below_one_is_not_floored_after_bias() {
        // raw = 1.16 - 0.20 = 0.96, biased = 1.056 which is not below 1.
        let inputs = ScenarioInputs {
            monthly_invoice_volume: 1.0,
            num_ap_staff: 1.0,
            avg_hours_per_invoice: 1.0,
            hourly_wage: 1.16,
            error_rate_manual: 0.1,
            ..ScenarioInputs::default()
        };
        let results = compute(&inputs);

        assert_eq!(results.monthly_savings, 1.06);
    }

    #[test]
    fn test_cumulative_savings_use_unrounded_monthly_figure() {
        // Unrounded monthly is 1.056: 1.056 * 36 = 38.016, while 1.06 * 36 = 38.16.
        let inputs = ScenarioInputs {
            monthly_invoice_volume: 1.0,
            num_ap_staff: 1.0,
            avg_hours_per_invoice: 1.0,
            hourly_wage: 1.16,
            error_rate_manual: 0.1,
            ..ScenarioInputs::default()
        };
        let results = compute(&inputs);

        assert_eq!(results.monthly_savings, 1.06);
        assert_eq!(results.cumulative_savings, 38.02);
        assert_ne!(
            results.cumulative_savings,
            round_to_cents(results.monthly_savings * 36.0)
        );
        assert_eq!(results.net_savings, 38.02);
    }

    #[test]
    fn test_raw_just_below_floor_is_floored_to_bias() {
        // raw = 0.5, biased = 0.55 < 1 so floor = max(1, 0.5) * 1.1.
        let inputs = ScenarioInputs {
            monthly_invoice_volume: 1.0,
            num_ap_staff: 1.0,
            avg_hours_per_invoice: 1.0,
            hourly_wage: 0.7,
            error_rate_manual: 0.1,
            ..ScenarioInputs::default()
        };
        let results = compute(&inputs);

        assert_eq!(results.monthly_savings, 1.1);
    }

    #[test]
    fn test_zero_implementation_cost_yields_infinite_payback_and_roi() {
        let inputs = ScenarioInputs {
            one_time_implementation_cost: 0.0,
            ..typical_inputs()
        };
        let results = compute(&inputs);

        assert!(results.payback_months.is_infinite());
        assert!(results.roi_percentage.is_infinite());
        assert_eq!(results.net_savings, results.cumulative_savings);
    }

    #[test]
    fn test_negative_implementation_cost_yields_infinite_roi_only() {
        let inputs = ScenarioInputs {
            one_time_implementation_cost: -1000.0,
            ..typical_inputs()
        };
        let results = compute(&inputs);

        assert!(results.roi_percentage.is_infinite());
        assert!(results.payback_months.is_finite());
        assert!(results.payback_months < 0.0);
    }

    #[test]
    fn test_time_horizon_scales_cumulative_savings() {
        let inputs = ScenarioInputs {
            time_horizon_months: 12,
            ..typical_inputs()
        };
        let results = compute(&inputs);

        assert_eq!(results.cumulative_savings, 409200.0);
        assert_eq!(results.net_savings, 359200.0);
    }

    #[test]
    fn test_nan_inputs_propagate() {
        let inputs = ScenarioInputs {
            hourly_wage: f64::NAN,
            ..typical_inputs()
        };
        let results = compute(&inputs);

        assert!(results.labor_cost_manual.is_nan());
        assert!(results.monthly_savings.is_nan());
        assert!(results.net_savings.is_nan());
        assert!(results.roi_percentage.is_nan());
        // NaN is never greater than zero.
        assert!(results.payback_months.is_infinite());
    }

    #[test]
    fn test_compute_matches_compute_with_defaults() {
        let inputs = typical_inputs();
        assert_eq!(
            compute(&inputs),
            compute_with(&inputs, &CalculatorConstants::default())
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let inputs = typical_inputs();
        assert_eq!(compute(&inputs), compute(&inputs));
    }

    fn finite_inputs() -> impl Strategy<Value = ScenarioInputs> {
        (
            0.0..100_000.0f64,
            0.0..200.0f64,
            0.0..10.0f64,
            0.0..500.0f64,
            0.0..20.0f64,
            0.0..1_000.0f64,
            1i64..240,
            0.0..10_000_000.0f64,
        )
            .prop_map(
                |(volume, staff, hours, wage, error_rate, error_cost, horizon, cost)| {
                    ScenarioInputs {
                        monthly_invoice_volume: volume,
                        num_ap_staff: staff,
                        avg_hours_per_invoice: hours,
                        hourly_wage: wage,
                        error_rate_manual: error_rate,
                        error_cost,
                        time_horizon_months: horizon,
                        one_time_implementation_cost: cost,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn prop_monthly_savings_never_below_floor(inputs in finite_inputs()) {
            let results = compute(&inputs);
            prop_assert!(results.monthly_savings >= MONTHLY_SAVINGS_FLOOR);
        }

        #[test]
        fn prop_payback_always_finite_with_positive_savings(inputs in finite_inputs()) {
            let results = compute(&inputs);
            prop_assert!(results.payback_months.is_finite());
        }

        #[test]
        fn prop_zero_cost_means_infinite_payback_and_roi(inputs in finite_inputs()) {
            let inputs = ScenarioInputs { one_time_implementation_cost: 0.0, ..inputs };
            let results = compute(&inputs);
            prop_assert_eq!(results.payback_months, f64::INFINITY);
            prop_assert_eq!(results.roi_percentage, f64::INFINITY);
        }

        #[test]
        fn prop_net_is_cumulative_less_cost(inputs in finite_inputs()) {
            let inputs = ScenarioInputs {
                one_time_implementation_cost: inputs.one_time_implementation_cost.round(),
                ..inputs
            };
            let results = compute(&inputs);
            let expected = results.cumulative_savings - inputs.one_time_implementation_cost;
            let tolerance = 0.011 + expected.abs() * 1e-12;
            prop_assert!((results.net_savings - expected).abs() <= tolerance);
        }

        #[test]
        fn prop_cumulative_is_unrounded_monthly_times_horizon(inputs in finite_inputs()) {
            let results = compute(&inputs);
            let monthly = monthly_figures(&inputs, &CalculatorConstants::default()).monthly_savings;
            let expected = round_to_cents(monthly * inputs.time_horizon_months as f64);
            prop_assert_eq!(results.cumulative_savings, expected);
            prop_assert_eq!(results.monthly_savings, round_to_cents(monthly));
        }

        #[test]
        fn prop_cumulative_within_half_cent_per_month_of_reported_monthly(
            inputs in finite_inputs()
        ) {
            let results = compute(&inputs);
            let horizon = inputs.time_horizon_months as f64;
            let drift = (results.cumulative_savings - results.monthly_savings * horizon).abs();
            let tolerance = 0.005 * horizon + 0.011 + results.cumulative_savings.abs() * 1e-12;
            prop_assert!(drift <= tolerance);
        }

        #[test]
        fn prop_compute_is_deterministic(inputs in finite_inputs()) {
            prop_assert_eq!(compute(&inputs), compute(&inputs));
        }

        #[test]
        fn prop_never_fails_on_negative_inputs(
            volume in -10_000.0..10_000.0f64,
            wage in -100.0..100.0f64,
            cost in -100_000.0..100_000.0f64,
            horizon in -120i64..120,
        ) {
            let inputs = ScenarioInputs {
                monthly_invoice_volume: volume,
                num_ap_staff: 1.0,
                avg_hours_per_invoice: 0.5,
                hourly_wage: wage,
                error_rate_manual: 1.0,
                error_cost: 10.0,
                time_horizon_months: horizon,
                one_time_implementation_cost: cost,
            };
            let results = compute(&inputs);
            prop_assert!(results.monthly_savings >= MONTHLY_SAVINGS_FLOOR);
        }
    }
}
