//! # Error Types
//!
//! Structured error types for bridge_core. Every failure is a deterministic
//! function of the input, so nothing here is retryable: callers surface the
//! error kind and the offending input.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "span_m",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bridge_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for clause evaluation.
///
/// Each variant carries the offending input so that batch callers can
/// aggregate failures programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input lies outside the range a table or formula is defined for
    #[error("Domain error in '{table}': {value} is outside the valid range [{min}, {max}]")]
    DomainError {
        table: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A required categorical or numeric input is absent
    #[error("Missing required parameter: {field}")]
    MissingParameter { field: String },

    /// Parallel arrays disagree in length (axle positions vs. axle loads)
    #[error("Configuration mismatch in {what}: expected {expected}, got {actual}")]
    ConfigurationMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// A categorical combination the standard does not define
    #[error("Unsupported configuration for '{parameter}' = {value}: {reason}")]
    UnsupportedConfiguration {
        parameter: String,
        value: String,
        reason: String,
    },

    /// An input value is invalid (non-finite, wrong sign, wrong unit kind)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Evaluation settings could not be read or are inconsistent
    #[error("Settings error: {reason}")]
    SettingsError { reason: String },
}

impl CalcError {
    /// Create a DomainError
    pub fn domain(table: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        CalcError::DomainError {
            table: table.into(),
            value,
            min,
            max,
        }
    }

    /// Create a MissingParameter error
    pub fn missing_parameter(field: impl Into<String>) -> Self {
        CalcError::MissingParameter {
            field: field.into(),
        }
    }

    /// Create a ConfigurationMismatch error
    pub fn configuration_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        CalcError::ConfigurationMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported(
        parameter: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::UnsupportedConfiguration {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SettingsError
    pub fn settings(reason: impl Into<String>) -> Self {
        CalcError::SettingsError {
            reason: reason.into(),
        }
    }

    /// Whether the caller can fix this by changing the inputs of a single clause.
    ///
    /// Unsupported configurations and settings errors are not input errors:
    /// the standard (or the environment) simply does not cover the case.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::DomainError { .. }
                | CalcError::MissingParameter { .. }
                | CalcError::ConfigurationMismatch { .. }
                | CalcError::InvalidInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::MissingParameter { .. } => "MISSING_PARAMETER",
            CalcError::ConfigurationMismatch { .. } => "CONFIGURATION_MISMATCH",
            CalcError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SettingsError { .. } => "SETTINGS_ERROR",
        }
    }
}

/// Reject NaN and infinities before they reach a formula.
pub(crate) fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"))
    }
}

/// Reject zero, negative and non-finite values.
pub(crate) fn ensure_positive(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(value)
}

/// Reject negative and non-finite values.
pub(crate) fn ensure_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::domain("IRC 6:2017 Table 3", 10.0, 10.0, f64::MAX);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("DomainError"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_parameter("girder_depth_m").error_code(), "MISSING_PARAMETER");
        assert_eq!(
            CalcError::configuration_mismatch("axle loads", 7, 6).error_code(),
            "CONFIGURATION_MISMATCH"
        );
        assert_eq!(
            CalcError::unsupported("spacing_ratio", "8.0", "exceeds 7").error_code(),
            "UNSUPPORTED_CONFIGURATION"
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CalcError::missing_parameter("x").is_input_error());
        assert!(!CalcError::unsupported("x", "1", "not tabulated").is_input_error());
        assert!(!CalcError::settings("bad json").is_input_error());
    }

    #[test]
    fn test_guards() {
        assert!(ensure_positive("span_m", 0.0).is_err());
        assert!(ensure_positive("span_m", f64::NAN).is_err());
        assert_eq!(ensure_positive("span_m", 2.5).unwrap(), 2.5);
        assert!(ensure_non_negative("width_m", -0.1).is_err());
        assert_eq!(ensure_non_negative("width_m", 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_display_message() {
        let error = CalcError::configuration_mismatch("axle loads", 7, 6);
        assert_eq!(error.to_string(), "Configuration mismatch in axle loads: expected 7, got 6");
    }
}
