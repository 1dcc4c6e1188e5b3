//! Application state for the Surcharge Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, SurchargeRules};

/// Shared application state.
///
/// Holds the loaded surcharge policy, shared read-only across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the active classification rules.
    pub fn rules(&self) -> &SurchargeRules {
        self.config.rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(ConfigLoader::builtin());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.config(), cloned.config()));
        assert_eq!(*cloned.rules(), SurchargeRules::default());
    }
}
