//! Error types for the payroll reconciliation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Data-quality problems (missing punches, unmatched days, unparsable record
//! dates) are deliberately *not* errors: the engine degrades gracefully and
//! excludes the offending record instead. Errors here cover configuration
//! loading and impossible month construction only.

use thiserror::Error;

/// The main error type for the payroll reconciliation engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded policy value was out of its allowed range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A year/month pair did not denote a real calendar month.
    #[error("Invalid calendar month: {year}-{month:02}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
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
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Policy file not found: /missing/policy.yaml"
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
            "Failed to parse policy file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_field_and_message() {
        let error = EngineError::InvalidPolicy {
            field: "required_minutes".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid policy field 'required_minutes': must be positive"
        );
    }

    #[test]
    fn test_invalid_month_displays_zero_padded() {
        let error = EngineError::InvalidMonth {
            year: 2025,
            month: 13,
        };
        assert_eq!(error.to_string(), "Invalid calendar month: 2025-13");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_month() -> EngineResult<()> {
            Err(EngineError::InvalidMonth {
                year: 2025,
                month: 0,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
