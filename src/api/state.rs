//! Application state for the labor evaluation API.

use std::sync::Arc;

use crate::calculation::Evaluator;
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the evaluator built from the loaded rule set. The evaluator is
/// immutable, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    evaluator: Arc<Evaluator>,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            evaluator: Arc::new(Evaluator::from_config(&config)),
        }
    }

    /// Returns the shared evaluator.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
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
    fn test_app_state_uses_loaded_rules() {
        let state = AppState::new(ConfigLoader::default());
        assert_eq!(state.evaluator().rules().minimum_wage_hourly, 10030);
    }
}
