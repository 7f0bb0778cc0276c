//! Core data models for the invoice ROI service.
//!
//! This module contains the input, result, and persisted scenario types.

mod computed_results;
mod scenario;
mod scenario_inputs;

pub use computed_results::ComputedResults;
pub use scenario::{NewScenario, Scenario, ScenarioId};
pub use scenario_inputs::{DEFAULT_TIME_HORIZON_MONTHS, ScenarioInputs};
