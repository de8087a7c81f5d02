//! # Error Types
//!
//! Domain-specific error types for parkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  FareError        - Fare computation rejected                          │
//! │  ├── InvalidInterval   exit missing or before entry                    │
//! │  ├── UnknownCategory   no parking type / unrecognised parking type     │
//! │  └── Validation        wraps ValidationError                           │
//! │                                                                         │
//! │  ValidationError  - Input validation failures                          │
//! │                                                                         │
//! │  ConfigError      - Rate table could not be loaded                     │
//! │                                                                         │
//! │  Flow: ValidationError → FareError → caller refuses to close ticket    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (timestamps, offending value)
//! 3. Errors are enum variants, never String
//! 4. No variant is retryable: every failure is a data-correctness problem

use chrono::{DateTime, Utc};
use thiserror::Error;

// =============================================================================
// Fare Error
// =============================================================================

/// Errors that reject a fare computation.
///
/// Callers should surface both kinds as an input-validation failure and
/// refuse to close out the parking session.
#[derive(Debug, Error)]
pub enum FareError {
    /// The exit time is missing or earlier than the entry time.
    ///
    /// ## When This Occurs
    /// - Ticket handed over before the vehicle exited (`out_time` is `None`)
    /// - Clock skew between the entry and exit gates
    /// - Entry time recorded in the future
    #[error("Out time provided is incorrect: {}", display_out_time(.out_time))]
    InvalidInterval {
        in_time: DateTime<Utc>,
        out_time: Option<DateTime<Utc>>,
    },

    /// The parking type is missing or not one of the known categories.
    ///
    /// ## When This Occurs
    /// - The ticket's parking spot carries no parking type
    /// - A stored category string does not parse (e.g. `"TRUCK"`)
    ///
    /// Either case points at an upstream data-integrity bug.
    #[error("Unknown parking type: {}", .value.as_deref().unwrap_or("<none>"))]
    UnknownCategory { value: Option<String> },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn display_out_time(out_time: &Option<DateTime<Utc>>) -> String {
    match out_time {
        Some(t) => t.to_rfc3339(),
        None => "<none>".to_string(),
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of rates, registration numbers and identifiers.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater (and a real number).
    #[error("{field} must be a non-negative number, got {value}")]
    MustBeNonNegative { field: String, value: f64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Config Error
// =============================================================================

/// Rate table configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid rate: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed rate table: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with FareError.
pub type FareResult<T> = Result<T, FareError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_invalid_interval_message() {
        let in_time = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let out_time = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

        let err = FareError::InvalidInterval {
            in_time,
            out_time: Some(out_time),
        };
        assert_eq!(
            err.to_string(),
            "Out time provided is incorrect: 2024-03-01T09:00:00+00:00"
        );

        let err = FareError::InvalidInterval {
            in_time,
            out_time: None,
        };
        assert_eq!(err.to_string(), "Out time provided is incorrect: <none>");
    }

    #[test]
    fn test_unknown_category_message() {
        let err = FareError::UnknownCategory {
            value: Some("TRUCK".to_string()),
        };
        assert_eq!(err.to_string(), "Unknown parking type: TRUCK");

        let err = FareError::UnknownCategory { value: None };
        assert_eq!(err.to_string(), "Unknown parking type: <none>");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "vehicle_reg_number".to_string(),
        };
        assert_eq!(err.to_string(), "vehicle_reg_number is required");

        let err = ValidationError::MustBeNonNegative {
            field: "CAR hourly rate".to_string(),
            value: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "CAR hourly rate must be a non-negative number, got -1.5"
        );
    }

    #[test]
    fn test_validation_converts_to_fare_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "spot number".to_string(),
        };
        let fare_err: FareError = validation_err.into();
        assert!(matches!(fare_err, FareError::Validation(_)));
    }
}
