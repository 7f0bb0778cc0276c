//! Scenario persistence.
//!
//! The [`ScenarioStore`] trait is the seam between the HTTP layer and the
//! storage backend. Scenarios are insert-only: there is no update operation,
//! only deletion.

mod in_memory;

pub use in_memory::InMemoryScenarioStore;

use crate::error::RoiResult;
use crate::models::{NewScenario, Scenario, ScenarioId};

/// Scenario store abstraction.
pub trait ScenarioStore: Send + Sync {
    /// Stores a new scenario, assigning its identifier and creation time.
    fn insert(&self, scenario: NewScenario) -> RoiResult<Scenario>;

    /// Lists stored scenarios, most recent first, returning at most `limit`.
    fn list(&self, limit: usize) -> RoiResult<Vec<Scenario>>;

    /// Gets a scenario by identifier.
    ///
    /// Fails with `ScenarioNotFound` if the identifier does not resolve.
    fn get(&self, id: &ScenarioId) -> RoiResult<Scenario>;

    /// Deletes a scenario by identifier.
    ///
    /// Fails with `ScenarioNotFound` if the identifier does not resolve.
    fn delete(&self, id: &ScenarioId) -> RoiResult<()>;
}
