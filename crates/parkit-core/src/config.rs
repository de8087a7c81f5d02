//! Rate table configuration.
//!
//! Rates are loaded once at startup, from environment variables or from a
//! JSON document, with fallback to the built-in defaults. After that the
//! table is read-only.
//!
//! | Variable                     | Default |
//! |------------------------------|---------|
//! | `PARKIT_CAR_RATE_PER_HOUR`   | `1.5`   |
//! | `PARKIT_BIKE_RATE_PER_HOUR`  | `1.0`   |

use std::env;

use tracing::info;

use crate::error::ConfigError;
use crate::rate::{HourlyRate, RateTable};
use crate::types::ParkingType;
use crate::validation::validate_hourly_rate;

/// Environment variable holding the hourly rate for a category.
pub const fn rate_env_var(parking_type: ParkingType) -> &'static str {
    match parking_type {
        ParkingType::Car => "PARKIT_CAR_RATE_PER_HOUR",
        ParkingType::Bike => "PARKIT_BIKE_RATE_PER_HOUR",
    }
}

impl RateTable {
    /// Load rates from environment variables.
    ///
    /// Unset variables fall back to the default rate for that category.
    /// A variable that is set but unparsable or negative is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load rates through `lookup`, which maps a variable name to its value.
    ///
    /// ## Example
    /// ```rust
    /// use parkit_core::{ParkingType, RateTable};
    ///
    /// let rates = RateTable::from_lookup(|key| match key {
    ///     "PARKIT_CAR_RATE_PER_HOUR" => Some("3".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(rates.rate_for(ParkingType::Car).per_hour(), 3.0);
    /// assert_eq!(rates.rate_for(ParkingType::Bike).per_hour(), 1.0);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RateTable::default();

        let load = |parking_type: ParkingType| -> Result<HourlyRate, ConfigError> {
            let key = rate_env_var(parking_type);
            match lookup(key) {
                None => Ok(defaults.rate_for(parking_type)),
                Some(raw) => {
                    let per_hour: f64 =
                        raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            value: raw.clone(),
                        })?;
                    validate_hourly_rate(key, per_hour)?;
                    Ok(HourlyRate::new(per_hour)?)
                }
            }
        };

        let rates = RateTable::new(load(ParkingType::Car)?, load(ParkingType::Bike)?);
        info!(
            car = %rates.rate_for(ParkingType::Car),
            bike = %rates.rate_for(ParkingType::Bike),
            "Loaded rate table from environment"
        );
        Ok(rates)
    }

    /// Parse a rate table document: `{"CAR": 1.5, "BIKE": 1.0}`.
    ///
    /// Both categories are required and no other keys are accepted.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rates: RateTable = serde_json::from_str(json)?;
        info!(
            car = %rates.rate_for(ParkingType::Car),
            bike = %rates.rate_for(ParkingType::Bike),
            "Loaded rate table from JSON"
        );
        Ok(rates)
    }
}
