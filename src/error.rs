//! Error types for the AccShift rate engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during rate resolution.

use thiserror::Error;

/// The main error type for the rate engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use accshift_engine::error::EngineError;
///
/// let error = EngineError::InvalidConfiguration {
///     key: "ot_rate_weekday".to_string(),
///     value: "abc".to_string(),
///     message: "not a number".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid configuration value for 'ot_rate_weekday': 'abc' (not a number)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A configuration value failed to parse or violated an invariant.
    ///
    /// Raised at the settings boundary so the settings UI can surface the
    /// offending key to the user. Never silently coerced.
    #[error("Invalid configuration value for '{key}': '{value}' ({message})")]
    InvalidConfiguration {
        /// The settings key holding the bad value.
        key: String,
        /// The raw persisted value.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A configuration key required by a strict load was absent.
    #[error("Missing configuration key: {key}")]
    MissingConfiguration {
        /// The settings key that was not found.
        key: String,
    },

    /// A work interval was invalid (end not after start).
    #[error("Invalid work interval: {message}")]
    InvalidInterval {
        /// A description of what made the interval invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_displays_key_value_and_message() {
        let error = EngineError::InvalidConfiguration {
            key: "night_work_rate".to_string(),
            value: "-10".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for 'night_work_rate': '-10' (must not be negative)"
        );
    }

    #[test]
    fn test_missing_configuration_displays_key() {
        let error = EngineError::MissingConfiguration {
            key: "ot_threshold_hours".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Missing configuration key: ot_threshold_hours"
        );
    }

    #[test]
    fn test_invalid_interval_displays_message() {
        let error = EngineError::InvalidInterval {
            message: "end time not after start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid work interval: end time not after start time"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative overtime hours".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Calculation error: negative overtime hours"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_key() -> EngineResult<()> {
            Err(EngineError::MissingConfiguration {
                key: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_missing_key()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
