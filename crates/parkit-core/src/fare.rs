//! # Fare Calculation
//!
//! Turns a closed ticket into a price.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   duration_hours = (out_time_ms - in_time_ms) / 3_600_000              │
//! │   price          = duration_hours × rate(parking_type)                 │
//! │                                                                         │
//! │   45 min CAR @ 1.5/h  ──►  0.75 × 1.5 = 1.125                          │
//! │   24 h   CAR @ 1.5/h  ──►  24   × 1.5 = 36.0   (no daily cap)          │
//! │    0 min BIKE         ──►  0.0                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Workflow
//! ```text
//! Exit gate: ticket.close(now)
//!      │
//!      ▼
//! calculate_fare(&mut ticket) / quote(&ticket)  ← THIS MODULE
//!      │
//!      ├── out_time missing or < in_time? → FareError::InvalidInterval
//!      │
//!      ├── spot has no parking type?      → FareError::UnknownCategory
//!      │
//!      └── OK → price
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::error::{FareError, FareResult};
use crate::rate::RateTable;
use crate::types::{ParkingInterval, ParkingType, Ticket};

// =============================================================================
// Fare Quote
// =============================================================================

/// A computed fare, returned without touching the ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FareQuote {
    /// Ticket the fare was computed for.
    pub ticket_id: String,

    /// Category the rate was looked up for.
    pub parking_type: ParkingType,

    /// Exact stay length in fractional hours.
    pub duration_hours: f64,

    /// Rate applied, per hour.
    pub hourly_rate: f64,

    /// `duration_hours × hourly_rate`, unrounded.
    pub price: f64,
}

// =============================================================================
// Fare Calculator
// =============================================================================

/// Prices parking stays against a fixed [`RateTable`].
///
/// Stateless apart from the rate table, so one calculator can be shared
/// across threads.
///
/// ## Example
/// ```rust
/// use chrono::{Duration, Utc};
/// use parkit_core::{FareCalculator, ParkingSpot, ParkingType, Ticket};
///
/// let calculator = FareCalculator::default();
///
/// let now = Utc::now();
/// let spot = ParkingSpot::new(1, Some(ParkingType::Car), false);
/// let mut ticket = Ticket::new(spot, "AB-123", now - Duration::hours(1)).unwrap();
/// ticket.close(now);
///
/// let price = calculator.calculate_fare(&mut ticket).unwrap();
/// assert!((price - 1.5).abs() < 1e-9);
/// assert_eq!(ticket.price, price);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    rates: RateTable,
}

impl FareCalculator {
    pub fn new(rates: RateTable) -> Self {
        FareCalculator { rates }
    }

    /// The rate table this calculator prices against.
    #[inline]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Price of `interval` for `parking_type`. Inputs are already validated,
    /// so this cannot fail.
    #[inline]
    pub fn fare_for(&self, interval: &ParkingInterval, parking_type: ParkingType) -> f64 {
        self.rates
            .rate_for(parking_type)
            .charge_for(interval.duration_hours())
    }

    /// Computes the fare for a closed ticket without modifying it.
    ///
    /// ## Errors
    /// - [`FareError::InvalidInterval`] if `out_time` is missing or earlier
    ///   than `in_time` (checked first)
    /// - [`FareError::UnknownCategory`] if the spot has no parking type
    pub fn quote(&self, ticket: &Ticket) -> FareResult<FareQuote> {
        let (interval, parking_type) = Self::pricing_inputs(ticket).inspect_err(|err| {
            warn!(ticket_id = %ticket.id, error = %err, "Fare rejected");
        })?;

        let rate = self.rates.rate_for(parking_type);
        let duration_hours = interval.duration_hours();
        let price = rate.charge_for(duration_hours);

        debug!(
            ticket_id = %ticket.id,
            parking_type = %parking_type,
            duration_hours,
            price,
            "Computed fare"
        );

        Ok(FareQuote {
            ticket_id: ticket.id.clone(),
            parking_type,
            duration_hours,
            hourly_rate: rate.per_hour(),
            price,
        })
    }

    /// Computes the fare for a closed ticket and stores it in `ticket.price`.
    ///
    /// On error the ticket is left untouched. Returns the price that was
    /// written.
    pub fn calculate_fare(&self, ticket: &mut Ticket) -> FareResult<f64> {
        let quote = self.quote(ticket)?;
        ticket.price = quote.price;
        Ok(quote.price)
    }

    fn pricing_inputs(ticket: &Ticket) -> FareResult<(ParkingInterval, ParkingType)> {
        let interval = ticket.interval()?;
        let parking_type = ticket
            .parking_type()
            .ok_or(FareError::UnknownCategory { value: None })?;
        Ok((interval, parking_type))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
