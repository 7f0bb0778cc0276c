//! Application state for the invoice ROI API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::report::{PdfReportRenderer, ReportRenderer};
use crate::storage::{InMemoryScenarioStore, ScenarioStore};

/// Shared application state.
///
/// Contains the read-only configuration loaded at startup, the scenario
/// store and the report renderer.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn ScenarioStore>,
    renderer: Arc<dyn ReportRenderer>,
}

impl AppState {
    /// Creates a state with an in-memory store and the PDF renderer.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_parts(
            config,
            InMemoryScenarioStore::arc(),
            Arc::new(PdfReportRenderer::new()),
        )
    }

    /// Creates a state from explicit collaborators.
    pub fn with_parts(
        config: ConfigLoader,
        store: Arc<dyn ScenarioStore>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            renderer,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the scenario store.
    pub fn store(&self) -> &dyn ScenarioStore {
        self.store.as_ref()
    }

    /// Returns the report renderer.
    pub fn renderer(&self) -> &dyn ReportRenderer {
        self.renderer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        use crate::calculation::compute;
        use crate::models::{NewScenario, ScenarioInputs};

        let state = AppState::new(ConfigLoader::default());
        let clone = state.clone();
        let inputs = ScenarioInputs::default();
        state
            .store()
            .insert(NewScenario {
                scenario_name: "shared".to_string(),
                inputs,
                results: compute(&inputs),
            })
            .unwrap();

        assert_eq!(clone.store().list(10).unwrap().len(), 1);
    }
}
