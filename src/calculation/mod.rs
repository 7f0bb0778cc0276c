//! Calculation logic for the invoice ROI service.
//!
//! This module contains the ROI calculator, which derives labor, automation
//! and error costs, applies the bias factor and monthly savings floor, and
//! projects savings, payback and ROI over the time horizon, plus the
//! two-decimal rounding helper applied to every reported figure.

mod roi;
mod rounding;

pub use roi::{MONTHLY_SAVINGS_FLOOR, compute, compute_with};
pub use rounding::round_to_cents;
