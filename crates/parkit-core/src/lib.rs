//! # parkit-core: Parking Fare Logic for ParkIt
//!
//! This crate prices parking stays. It contains the fare rule and the types
//! it works on as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ParkIt Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Entry / exit workflow (collaborators)              │   │
//! │  │    allocate spot ──► open ticket ──► close ticket ──► store     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut Ticket / &Ticket                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ parkit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   rate    │  │   fare    │  │ validation│  │   │
//! │  │   │  Ticket   │  │ RateTable │  │FareCalc.  │  │   rules   │  │   │
//! │  │   │  Interval │  │HourlyRate │  │ FareQuote │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO STORAGE • NO NETWORK • NO UI • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Ticket, ParkingSpot, ParkingType, ParkingInterval)
//! - [`rate`] - Hourly rates and the per-category rate table
//! - [`config`] - Loading the rate table from the environment or JSON
//! - [`fare`] - The fare calculator
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same ticket and rates = same price
//! 2. **Immutable Rates**: the rate table is a value, fixed once loaded
//! 3. **Exact Durations**: millisecond difference in fractional hours, never
//!    rounded to whole hours
//! 4. **Explicit Errors**: bad intervals and unknown categories are typed
//!    errors, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use parkit_core::{FareCalculator, FareError, ParkingSpot, ParkingType, RateTable, Ticket};
//!
//! let calculator = FareCalculator::new(RateTable::default());
//!
//! let exit = Utc::now();
//! let spot = ParkingSpot::new(7, Some(ParkingType::Bike), false);
//! let mut ticket = Ticket::new(spot, "BK-77", exit - Duration::minutes(45)).unwrap();
//! ticket.close(exit);
//!
//! // 45 minutes on a bike at 1.0/h
//! let quote = calculator.quote(&ticket).unwrap();
//! assert!((quote.price - 0.75).abs() < 1e-9);
//!
//! // An exit before the entry is rejected
//! ticket.close(exit - Duration::hours(2));
//! assert!(matches!(
//!     calculator.calculate_fare(&mut ticket),
//!     Err(FareError::InvalidInterval { .. })
//! ));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod fare;
pub mod rate;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ConfigError, FareError, FareResult, ValidationError};
pub use fare::{FareCalculator, FareQuote};
pub use rate::{HourlyRate, RateTable};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: f64 = 60.0 * 60.0 * 1000.0;

/// Default hourly rate for cars.
pub const DEFAULT_CAR_RATE_PER_HOUR: f64 = 1.5;

/// Default hourly rate for bikes.
pub const DEFAULT_BIKE_RATE_PER_HOUR: f64 = 1.0;
