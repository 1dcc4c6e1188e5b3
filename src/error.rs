//! Error types for the Surcharge Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The classifier itself is infallible; errors come from loading rules
//! configuration and from validating caller-supplied shifts.

use thiserror::Error;

/// The main error type for the Surcharge Engine.
///
/// # Example
///
/// ```
/// use surcharge_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A surcharge rule value was out of range.
    #[error("Invalid rule '{field}': {message}")]
    InvalidRules {
        /// The rule field that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A shift supplied by a caller failed validation.
    #[error("Invalid shift: {message}")]
    InvalidShift {
        /// A description of what made the shift invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/rules.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/rules.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_rules_displays_field_and_message() {
        let error = EngineError::InvalidRules {
            field: "sweep_step".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid rule 'sweep_step': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_shift_displays_message() {
        let error = EngineError::InvalidShift {
            message: "start_hour must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift: start_hour must not be negative"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_rules() -> EngineResult<()> {
            Err(EngineError::InvalidRules {
                field: "night_start".to_string(),
                message: "out of range".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_rules()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
