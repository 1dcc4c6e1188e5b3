//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading surcharge
//! policy configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{PolicyConfig, PolicyMetadata, RulesConfig, SurchargeRules};

/// Loads and provides access to a surcharge policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml   # Policy metadata
/// └── rules.yaml    # Night window, ordinary limit and sweep step
/// ```
///
/// # Example
///
/// ```no_run
/// use surcharge_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Policy: {}", loader.policy().name);
/// println!("Ordinary limit: {}h", loader.rules().ordinary_limit());
/// # Ok::<(), surcharge_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing
    /// - Either file contains invalid YAML or misses a field
    /// - The rule values fail validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let raw_rules = Self::load_yaml::<RulesConfig>(&path.join("rules.yaml"))?;
        let rules = SurchargeRules::try_from(raw_rules)?;

        debug!(
            policy = %metadata.code,
            version = %metadata.version,
            "Loaded surcharge policy"
        );

        Ok(Self {
            config: PolicyConfig::new(metadata, rules),
        })
    }

    /// Returns the built-in default policy without touching the filesystem.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Returns the classification rules.
    pub fn rules(&self) -> &SurchargeRules {
        self.config.rules()
    }
}
