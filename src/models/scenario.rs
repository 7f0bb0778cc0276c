//! Persisted scenario model.
//!
//! A [`Scenario`] is a named set of inputs together with the results computed
//! from them and the moment it was saved. Scenarios are immutable once stored.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RoiError, RoiResult};

use super::{ComputedResults, ScenarioInputs};

/// Identifier of a stored scenario.
///
/// # Example
///
/// ```
/// use invoice_roi::models::ScenarioId;
///
/// let id = ScenarioId::new();
/// let parsed = ScenarioId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
///
/// assert!(ScenarioId::parse("42").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(Uuid);

impl ScenarioId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses an identifier supplied by a caller.
    ///
    /// Returns `MalformedIdentifier` if the text is not a UUID.
    pub fn parse(raw: &str) -> RoiResult<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| RoiError::MalformedIdentifier {
                id: raw.to_string(),
            })
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A scenario that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewScenario {
    /// Display name chosen by the user.
    pub scenario_name: String,
    /// The inputs the results were computed from.
    pub inputs: ScenarioInputs,
    /// The computed results.
    pub results: ComputedResults,
}

/// A stored scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Store-assigned identifier.
    pub id: ScenarioId,
    /// Display name chosen by the user.
    pub scenario_name: String,
    /// The inputs the results were computed from.
    pub inputs: ScenarioInputs,
    /// The computed results.
    pub results: ComputedResults,
    /// When the scenario was saved.
    pub created_at: DateTime<Utc>,
}

impl Scenario {
    /// Stamps a new scenario with an identifier and creation time.
    pub fn from_new(new: NewScenario, id: ScenarioId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            scenario_name: new.scenario_name,
            inputs: new.inputs,
            results: new.results,
            created_at,
        }
    }
}
