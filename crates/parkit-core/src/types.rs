//! # Domain Types
//!
//! Core domain types used by the fare calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Ticket      │   │  ParkingSpot    │   │  ParkingType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │──►│  number         │──►│  Car            │       │
//! │  │  vehicle_reg    │   │  parking_type?  │   │  Bike           │       │
//! │  │  in_time        │   │  is_available   │   └─────────────────┘       │
//! │  │  out_time?      │   └─────────────────┘                             │
//! │  │  price          │                                                    │
//! │  └────────┬────────┘                                                    │
//! │           │ interval()                                                  │
//! │           ▼                                                             │
//! │  ┌─────────────────┐                                                    │
//! │  │ParkingInterval  │   entry <= exit, always                            │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tickets are created and stored by collaborators outside this crate. The
//! calculator only reads the interval and the category, and writes `price`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{FareError, FareResult};
use crate::validation::{
    validate_spot_number, validate_ticket_id, validate_vehicle_reg_number, ValidationResult,
};
use crate::MILLIS_PER_HOUR;

// =============================================================================
// Parking Type
// =============================================================================

/// The vehicle category a parking spot is built for.
///
/// This is a closed set: every `match` over it is exhaustive, so adding a
/// category forces a rate to be supplied in [`crate::RateTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "UPPERCASE"))]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParkingType {
    Car,
    Bike,
}

impl ParkingType {
    /// Every known category, in declaration order.
    pub const ALL: [ParkingType; 2] = [ParkingType::Car, ParkingType::Bike];

    /// The canonical upper-case tag (`"CAR"`, `"BIKE"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParkingType::Car => "CAR",
            ParkingType::Bike => "BIKE",
        }
    }
}

impl fmt::Display for ParkingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a stored category tag.
///
/// ## Example
/// ```rust
/// use parkit_core::ParkingType;
///
/// assert_eq!(" bike ".parse::<ParkingType>().unwrap(), ParkingType::Bike);
/// assert!("TRUCK".parse::<ParkingType>().is_err());
/// ```
impl FromStr for ParkingType {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ParkingType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| FareError::UnknownCategory {
                value: Some(s.to_string()),
            })
    }
}

// =============================================================================
// Parking Spot
// =============================================================================

/// A physical parking spot.
///
/// `parking_type` is optional because spots come from an external allocator
/// that may hand over incomplete records. The calculator rejects those with
/// [`FareError::UnknownCategory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParkingSpot {
    /// Spot number as painted on the ground.
    pub number: i32,

    /// Vehicle category the spot is built for.
    pub parking_type: Option<ParkingType>,

    /// Whether the spot is free.
    pub is_available: bool,
}

impl ParkingSpot {
    pub fn new(number: i32, parking_type: Option<ParkingType>, is_available: bool) -> Self {
        ParkingSpot {
            number,
            parking_type,
            is_available,
        }
    }
}

// =============================================================================
// Parking Interval
// =============================================================================

/// A validated entry/exit pair.
///
/// The only constructor is [`ParkingInterval::new`], so a value of this type
/// always has `entry <= exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkingInterval {
    entry: DateTime<Utc>,
    exit: DateTime<Utc>,
}

impl ParkingInterval {
    /// Validates an entry time against an optional exit time.
    ///
    /// ## Rules
    /// - Exit must be present
    /// - Exit must not be earlier than entry (equal is a zero-length stay)
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use parkit_core::ParkingInterval;
    ///
    /// let exit = Utc::now();
    /// let interval = ParkingInterval::new(exit - Duration::minutes(90), Some(exit)).unwrap();
    /// assert!((interval.duration_hours() - 1.5).abs() < 1e-9);
    ///
    /// assert!(ParkingInterval::new(exit, None).is_err());
    /// assert!(ParkingInterval::new(exit + Duration::hours(1), Some(exit)).is_err());
    /// ```
    pub fn new(entry: DateTime<Utc>, exit: Option<DateTime<Utc>>) -> FareResult<Self> {
        match exit {
            Some(exit) if exit >= entry => Ok(ParkingInterval { entry, exit }),
            _ => Err(FareError::InvalidInterval {
                in_time: entry,
                out_time: exit,
            }),
        }
    }

    #[inline]
    pub fn entry(&self) -> DateTime<Utc> {
        self.entry
    }

    #[inline]
    pub fn exit(&self) -> DateTime<Utc> {
        self.exit
    }

    /// Elapsed milliseconds. Never negative.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        (self.exit - self.entry).num_milliseconds()
    }

    /// Elapsed time as fractional hours, from the exact millisecond
    /// difference. No rounding to whole hours.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration_ms() as f64 / MILLIS_PER_HOUR
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// One parking session.
///
/// ## Lifecycle
/// ```text
/// Vehicle enters ──► Ticket::new()      out_time = None, price = 0.0
///       │
///       ▼
/// Vehicle exits  ──► ticket.close(now)  out_time = Some(now)
///       │
///       ▼
/// Checkout       ──► FareCalculator::calculate_fare(&mut ticket)
///                                       price = hours × hourly rate
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Ticket {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Spot the vehicle was parked in; carries the category.
    pub parking_spot: ParkingSpot,

    /// Licence plate of the vehicle.
    pub vehicle_reg_number: String,

    /// Computed fare. Zero until the calculator has run.
    pub price: f64,

    /// When the vehicle entered.
    #[ts(as = "String")]
    pub in_time: DateTime<Utc>,

    /// When the vehicle exited.
    #[ts(as = "Option<String>")]
    pub out_time: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Opens a ticket for a vehicle that entered at `in_time`.
    ///
    /// The registration number is trimmed and checked, and the spot number
    /// must be positive. The category is not checked here: a spot without
    /// one is only rejected when the fare is computed.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use parkit_core::{ParkingSpot, ParkingType, Ticket};
    ///
    /// let spot = ParkingSpot::new(1, Some(ParkingType::Car), false);
    /// let ticket = Ticket::new(spot, " AB-123 ", Utc::now()).unwrap();
    /// assert_eq!(ticket.vehicle_reg_number, "AB-123");
    /// assert!(ticket.out_time.is_none());
    /// ```
    pub fn new(
        parking_spot: ParkingSpot,
        vehicle_reg_number: &str,
        in_time: DateTime<Utc>,
    ) -> ValidationResult<Self> {
        validate_spot_number(parking_spot.number)?;
        validate_vehicle_reg_number(vehicle_reg_number)?;

        Ok(Ticket {
            id: uuid::Uuid::new_v4().to_string(),
            parking_spot,
            vehicle_reg_number: vehicle_reg_number.trim().to_string(),
            price: 0.0,
            in_time,
            out_time: None,
        })
    }

    /// Re-checks a ticket that was built elsewhere (e.g. loaded from storage).
    pub fn validate(&self) -> ValidationResult<()> {
        validate_ticket_id(&self.id)?;
        validate_spot_number(self.parking_spot.number)?;
        validate_vehicle_reg_number(&self.vehicle_reg_number)
    }

    /// Records the exit time. Does not validate; that happens at pricing.
    pub fn close(&mut self, out_time: DateTime<Utc>) {
        self.out_time = Some(out_time);
    }

    /// The category of the spot this ticket was issued for.
    #[inline]
    pub fn parking_type(&self) -> Option<ParkingType> {
        self.parking_spot.parking_type
    }

    /// Validated entry/exit interval of this ticket.
    pub fn interval(&self) -> FareResult<ParkingInterval> {
        ParkingInterval::new(self.in_time, self.out_time)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parking_type_parse() {
        assert_eq!("CAR".parse::<ParkingType>().unwrap(), ParkingType::Car);
        assert_eq!("bike".parse::<ParkingType>().unwrap(), ParkingType::Bike);
        assert_eq!(" Car\n".parse::<ParkingType>().unwrap(), ParkingType::Car);

        let err = "TRUCK".parse::<ParkingType>().unwrap_err();
        assert!(matches!(
            err,
            FareError::UnknownCategory { value: Some(ref v) } if v == "TRUCK"
        ));
        assert!("".parse::<ParkingType>().is_err());
    }

    #[test]
    fn test_parking_type_display_roundtrips_through_serde() {
        assert_eq!(ParkingType::Car.to_string(), "CAR");
        assert_eq!(serde_json::to_string(&ParkingType::Bike).unwrap(), "\"BIKE\"");
        let parsed: ParkingType = serde_json::from_str("\"CAR\"").unwrap();
        assert_eq!(parsed, ParkingType::Car);
        assert!(serde_json::from_str::<ParkingType>("\"TRUCK\"").is_err());
    }

    #[test]
    fn test_interval_rejects_missing_exit() {
        let err = ParkingInterval::new(noon(), None).unwrap_err();
        assert!(matches!(
            err,
            FareError::InvalidInterval { out_time: None, .. }
        ));
    }

    #[test]
    fn test_interval_rejects_exit_before_entry() {
        let entry = noon() + Duration::hours(1);
        let err = ParkingInterval::new(entry, Some(noon())).unwrap_err();
        assert!(matches!(err, FareError::InvalidInterval { in_time, .. } if in_time == entry));
    }

    #[test]
    fn test_interval_zero_length() {
        let interval = ParkingInterval::new(noon(), Some(noon())).unwrap();
        assert_eq!(interval.duration_ms(), 0);
        assert_eq!(interval.duration_hours(), 0.0);
    }

    #[test]
    fn test_interval_keeps_milliseconds() {
        let entry = noon();
        let exit = entry + Duration::milliseconds(1_800_500);
        let interval = ParkingInterval::new(entry, Some(exit)).unwrap();
        assert_eq!(interval.duration_ms(), 1_800_500);
        assert!((interval.duration_hours() - 1_800_500.0 / 3_600_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_ticket_lifecycle() {
        let spot = ParkingSpot::new(1, Some(ParkingType::Car), false);
        let mut ticket = Ticket::new(spot, "ABCDEF", noon()).unwrap();

        assert!(ticket.validate().is_ok());
        assert_eq!(ticket.price, 0.0);
        assert_eq!(ticket.parking_type(), Some(ParkingType::Car));
        assert!(ticket.interval().is_err());

        ticket.close(noon() + Duration::minutes(30));
        let interval = ticket.interval().unwrap();
        assert!((interval.duration_hours() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ticket_ids_are_unique() {
        let spot = ParkingSpot::new(2, Some(ParkingType::Bike), true);
        let a = Ticket::new(spot.clone(), "BIKE-1", noon()).unwrap();
        let b = Ticket::new(spot, "BIKE-1", noon()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ticket_new_rejects_bad_input() {
        let spot = ParkingSpot::new(3, Some(ParkingType::Car), false);
        assert!(Ticket::new(spot.clone(), "", noon()).is_err());
        assert!(Ticket::new(spot, "WAY-TOO-LONG-PLATE", noon()).is_err());

        let unnumbered = ParkingSpot::new(0, Some(ParkingType::Car), false);
        assert!(Ticket::new(unnumbered, "ABC", noon()).is_err());
    }

    #[test]
    fn test_ticket_validate_catches_corrupt_id() {
        let spot = ParkingSpot::new(3, None, false);
        let mut ticket = Ticket::new(spot, "ABC", noon()).unwrap();
        ticket.id = "ticket-3".to_string();
        assert!(ticket.validate().is_err());
    }

    #[test]
    fn test_ticket_json_shape() {
        let spot = ParkingSpot::new(5, Some(ParkingType::Bike), false);
        let mut ticket = Ticket::new(spot, "BK-5", noon()).unwrap();
        ticket.close(noon() + Duration::hours(2));

        let json = serde_json::to_value(&ticket).unwrap();
        assert_eq!(json["parking_spot"]["parking_type"], "BIKE");
        assert_eq!(json["in_time"], "2024-06-01T12:00:00Z");
        assert_eq!(json["out_time"], "2024-06-01T14:00:00Z");

        let back: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(back, ticket);
    }
}
