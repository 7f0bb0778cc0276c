//! In-memory scenario store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::debug;

use crate::error::{RoiError, RoiResult};
use crate::models::{NewScenario, Scenario, ScenarioId};

use super::ScenarioStore;

#[derive(Debug)]
struct StoredScenario {
    // Insertion sequence, used to order scenarios saved in the same instant.
    sequence: u64,
    scenario: Scenario,
}

#[derive(Debug, Default)]
struct Inner {
    next_sequence: u64,
    scenarios: HashMap<ScenarioId, StoredScenario>,
}

/// In-memory scenario store for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryScenarioStore {
    inner: RwLock<Inner>,
}

impl InMemoryScenarioStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store behind an `Arc`.
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns the number of stored scenarios.
    pub fn len(&self) -> RoiResult<usize> {
        Ok(self.read()?.scenarios.len())
    }

    /// Returns true if no scenarios are stored.
    pub fn is_empty(&self) -> RoiResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> RoiResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> RoiResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> RoiError {
    RoiError::Storage {
        message: "scenario store lock poisoned".to_string(),
    }
}

impl ScenarioStore for InMemoryScenarioStore {
    fn insert(&self, scenario: NewScenario) -> RoiResult<Scenario> {
        let mut inner = self.write()?;
        let sequence = inner.next_sequence;
        inner.next_sequence += 1;

        let scenario = Scenario::from_new(scenario, ScenarioId::new(), Utc::now());
        debug!(scenario_id = %scenario.id, sequence, "Stored scenario");
        inner.scenarios.insert(
            scenario.id,
            StoredScenario {
                sequence,
                scenario: scenario.clone(),
            },
        );
        Ok(scenario)
    }

    fn list(&self, limit: usize) -> RoiResult<Vec<Scenario>> {
        let inner = self.read()?;
        let mut stored: Vec<&StoredScenario> = inner.scenarios.values().collect();
        stored.sort_by(|a, b| {
            b.scenario
                .created_at
                .cmp(&a.scenario.created_at)
                .then(b.sequence.cmp(&a.sequence))
        });

        Ok(stored
            .into_iter()
            .take(limit)
            .map(|s| s.scenario.clone())
            .collect())
    }

    fn get(&self, id: &ScenarioId) -> RoiResult<Scenario> {
        self.read()?
            .scenarios
            .get(id)
            .map(|s| s.scenario.clone())
            .ok_or_else(|| RoiError::ScenarioNotFound { id: id.to_string() })
    }

    fn delete(&self, id: &ScenarioId) -> RoiResult<()> {
        self.write()?
            .scenarios
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RoiError::ScenarioNotFound { id: id.to_string() })
    }
}
