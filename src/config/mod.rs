//! Configuration loading and management for the Surcharge Engine.
//!
//! This module loads the surcharge policy (night window, ordinary limit,
//! sweep step and the longest accepted shift) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use surcharge_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MAX_SHIFT_HOURS, PolicyConfig, PolicyMetadata, RulesConfig, SurchargeRules};
