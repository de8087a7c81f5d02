//! # Rate Module
//!
//! Provides `HourlyRate` and the immutable `RateTable` the fare calculator
//! prices against.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FARES ARE PROPORTIONAL                                                 │
//! │                                                                         │
//! │  A 45 minute stay costs 0.75 × the hourly rate, a 20 minute stay       │
//! │  1/3 × the hourly rate. Durations are fractional hours, so the fare    │
//! │  is a fractional amount too.                                            │
//! │                                                                         │
//! │  Rounding to a currency unit is a presentation concern and happens     │
//! │  wherever the fare is displayed or charged, not in this crate.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use parkit_core::{HourlyRate, ParkingType, RateTable};
//!
//! let rates = RateTable::new(HourlyRate::new(2.0)?, HourlyRate::new(0.5)?);
//! assert_eq!(rates.rate_for(ParkingType::Car).per_hour(), 2.0);
//!
//! // Negative rates never make it into a table
//! assert!(HourlyRate::new(-1.0).is_err());
//! # Ok::<(), parkit_core::ValidationError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::types::ParkingType;
use crate::validation::{validate_hourly_rate, ValidationResult};
use crate::{DEFAULT_BIKE_RATE_PER_HOUR, DEFAULT_CAR_RATE_PER_HOUR};

// =============================================================================
// Hourly Rate
// =============================================================================

/// Amount charged per hour of parking.
///
/// ## Invariant
/// Always finite and `>= 0`. Enforced by [`HourlyRate::new`] and by
/// deserialization, which goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct HourlyRate(f64);

impl HourlyRate {
    /// Creates a rate, rejecting negative, NaN and infinite values.
    pub fn new(per_hour: f64) -> ValidationResult<Self> {
        validate_hourly_rate("hourly rate", per_hour)?;
        Ok(HourlyRate(per_hour))
    }

    /// Zero rate (free parking).
    #[inline]
    pub const fn zero() -> Self {
        HourlyRate(0.0)
    }

    /// Raw amount per hour.
    #[inline]
    pub const fn per_hour(&self) -> f64 {
        self.0
    }

    /// Charge for `hours` of parking at this rate.
    ///
    /// ## Example
    /// ```rust
    /// use parkit_core::HourlyRate;
    ///
    /// let rate = HourlyRate::new(1.5).unwrap();
    /// assert_eq!(rate.charge_for(0.75), 1.125);
    /// assert_eq!(rate.charge_for(24.0), 36.0);
    /// ```
    #[inline]
    pub fn charge_for(&self, hours: f64) -> f64 {
        hours * self.0
    }
}

impl TryFrom<f64> for HourlyRate {
    type Error = ValidationError;

    fn try_from(per_hour: f64) -> Result<Self, Self::Error> {
        HourlyRate::new(per_hour)
    }
}

impl From<HourlyRate> for f64 {
    fn from(rate: HourlyRate) -> Self {
        rate.0
    }
}

impl fmt::Display for HourlyRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/h", self.0)
    }
}

// =============================================================================
// Rate Table
// =============================================================================

/// Hourly rate for every [`ParkingType`].
///
/// ## Design Decisions
/// - **One field per category**: adding a `ParkingType` variant breaks
///   [`RateTable::rate_for`] at compile time until a rate is added here
/// - **No setters**: fixed once built or loaded
/// - **Serialized shape**: `{"CAR": 1.5, "BIKE": 1.0}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    #[serde(rename = "CAR")]
    car: HourlyRate,

    #[serde(rename = "BIKE")]
    bike: HourlyRate,
}

impl RateTable {
    pub const fn new(car: HourlyRate, bike: HourlyRate) -> Self {
        RateTable { car, bike }
    }

    /// Looks up the hourly rate for a category.
    pub const fn rate_for(&self, parking_type: ParkingType) -> HourlyRate {
        match parking_type {
            ParkingType::Car => self.car,
            ParkingType::Bike => self.bike,
        }
    }

    /// Iterates `(category, rate)` pairs in [`ParkingType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ParkingType, HourlyRate)> + '_ {
        ParkingType::ALL.into_iter().map(|t| (t, self.rate_for(t)))
    }
}

/// Built-in rates: CAR 1.5 per hour, BIKE 1.0 per hour.
impl Default for RateTable {
    fn default() -> Self {
        RateTable::new(
            HourlyRate(DEFAULT_CAR_RATE_PER_HOUR),
            HourlyRate(DEFAULT_BIKE_RATE_PER_HOUR),
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rate_validation() {
        assert!(HourlyRate::new(0.0).is_ok());
        assert!(HourlyRate::new(1.5).is_ok());

        assert!(HourlyRate::new(-0.01).is_err());
        assert!(HourlyRate::new(f64::NAN).is_err());
        assert!(HourlyRate::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_charge_is_proportional() {
        let rate = HourlyRate::new(2.0).unwrap();
        assert_eq!(rate.charge_for(0.0), 0.0);
        assert_eq!(rate.charge_for(1.0), 2.0);
        assert!((rate.charge_for(1.0 / 3.0) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(HourlyRate::zero().charge_for(48.0), 0.0);
    }

    #[test]
    fn test_default_table() {
        let rates = RateTable::default();
        assert_eq!(rates.rate_for(ParkingType::Car).per_hour(), 1.5);
        assert_eq!(rates.rate_for(ParkingType::Bike).per_hour(), 1.0);
    }

    #[test]
    fn test_iter_covers_every_category() {
        let rates = RateTable::default();
        let categories: Vec<ParkingType> = rates.iter().map(|(t, _)| t).collect();
        assert_eq!(categories, ParkingType::ALL.to_vec());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(RateTable::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "CAR": 1.5, "BIKE": 1.0 }));
    }

    #[test]
    fn test_deserialize_rejects_negative_rate() {
        let result = serde_json::from_str::<RateTable>(r#"{"CAR": -2.0, "BIKE": 1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(HourlyRate::new(1.5).unwrap().to_string(), "1.5/h");
    }
}
