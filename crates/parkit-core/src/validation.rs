//! # Validation Module
//!
//! Input validation utilities for ParkIt.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Entry/exit gate (collaborator)                               │
//! │  ├── Reads plate, assigns spot                                         │
//! │  └── THIS MODULE: plate / spot / id checks before a ticket is stored   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Configuration load                                           │
//! │  └── THIS MODULE: every hourly rate is finite and non-negative         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Fare calculation                                             │
//! │  └── ParkingInterval / ParkingType reject bad intervals and categories │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use parkit_core::validation::{validate_vehicle_reg_number, validate_spot_number};
//!
//! validate_vehicle_reg_number("AB-123-CD").unwrap();
//! validate_spot_number(4).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest registration number accepted at the gate.
pub const MAX_REG_NUMBER_LEN: usize = 10;

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates an hourly rate.
///
/// ## Rules
/// - Must be a real number (not NaN, not infinite)
/// - Must be zero or greater (zero means free parking)
///
/// `field` names the rate in the error, e.g. `"CAR hourly rate"`.
pub fn validate_hourly_rate(field: &str, per_hour: f64) -> ValidationResult<()> {
    if !per_hour.is_finite() || per_hour < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            value: per_hour,
        });
    }

    Ok(())
}

// =============================================================================
// Ticket Validators
// =============================================================================

/// Validates a vehicle registration number.
///
/// ## Rules
/// - Must not be empty
/// - At most 10 characters
/// - Only ASCII letters, digits, hyphens and spaces
///
/// ## Example
/// ```rust
/// use parkit_core::validation::validate_vehicle_reg_number;
///
/// assert!(validate_vehicle_reg_number("AB 123 CD").is_ok());
/// assert!(validate_vehicle_reg_number("").is_err());
/// assert!(validate_vehicle_reg_number("ÉTÉ-42").is_err());
/// ```
pub fn validate_vehicle_reg_number(reg_number: &str) -> ValidationResult<()> {
    let reg_number = reg_number.trim();

    if reg_number.is_empty() {
        return Err(ValidationError::Required {
            field: "vehicle_reg_number".to_string(),
        });
    }

    if reg_number.len() > MAX_REG_NUMBER_LEN {
        return Err(ValidationError::TooLong {
            field: "vehicle_reg_number".to_string(),
            max: MAX_REG_NUMBER_LEN,
        });
    }

    if !reg_number
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == ' ')
    {
        return Err(ValidationError::InvalidFormat {
            field: "vehicle_reg_number".to_string(),
            reason: "must contain only letters, digits, hyphens and spaces".to_string(),
        });
    }

    Ok(())
}

/// Validates a parking spot number. Spots are numbered from 1.
pub fn validate_spot_number(number: i32) -> ValidationResult<()> {
    if number <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "spot number".to_string(),
        });
    }

    Ok(())
}

/// Validates a ticket identifier.
///
/// ## Example
/// ```rust
/// use parkit_core::validation::validate_ticket_id;
///
/// assert!(validate_ticket_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_ticket_id("ticket-7").is_err());
/// ```
pub fn validate_ticket_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "ticket id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "ticket id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hourly_rate() {
        assert!(validate_hourly_rate("rate", 0.0).is_ok());
        assert!(validate_hourly_rate("rate", 1.5).is_ok());

        assert!(validate_hourly_rate("rate", -1.0).is_err());
        assert!(validate_hourly_rate("rate", f64::NAN).is_err());
        assert!(validate_hourly_rate("rate", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_vehicle_reg_number() {
        assert!(validate_vehicle_reg_number("ABCDEF").is_ok());
        assert!(validate_vehicle_reg_number("AB-123-CD").is_ok());
        assert!(validate_vehicle_reg_number("  XY 99  ").is_ok());

        assert!(validate_vehicle_reg_number("").is_err());
        assert!(validate_vehicle_reg_number("   ").is_err());
        assert!(validate_vehicle_reg_number("AB_123").is_err());
        assert!(validate_vehicle_reg_number(&"A".repeat(11)).is_err());
    }

    #[test]
    fn test_validate_spot_number() {
        assert!(validate_spot_number(1).is_ok());
        assert!(validate_spot_number(0).is_err());
        assert!(validate_spot_number(-3).is_err());
    }

    #[test]
    fn test_validate_ticket_id() {
        assert!(validate_ticket_id(&uuid::Uuid::new_v4().to_string()).is_ok());
        assert!(validate_ticket_id("").is_err());
        assert!(validate_ticket_id("not-a-uuid").is_err());
    }
}
