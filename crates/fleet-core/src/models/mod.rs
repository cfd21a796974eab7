//! Data models for the fleet.
//!
//! This module contains the domain models: the three assignable resource
//! kinds (vehicles, trailers and drivers), the trips that bind them over a
//! time window, the tire and maintenance records that feed mileage alerts,
//! and the notifications those alerts produce. Display implementations live
//! in [`crate::display::models`].
//!
//! Every lifecycle field is a closed enum (see [`status`]), so a vehicle can
//! only ever be `active`, `in_use`, `maintenance` or `inactive`, and a trip
//! can only move along the transitions [`TripStatus::can_transition_to`]
//! allows.
//!
//! # Examples
//!
//! ```rust
//! use fleet_core::models::{Interval, TripStatus, VehicleStatus};
//! use jiff::Timestamp;
//!
//! assert!(VehicleStatus::InUse.is_eligible());
//! assert!(!VehicleStatus::Maintenance.is_eligible());
//! assert!(TripStatus::Planned.is_occupying());
//!
//! let start: Timestamp = "2024-01-15T08:00:00Z".parse().unwrap();
//! let end: Timestamp = "2024-01-15T18:00:00Z".parse().unwrap();
//! let trip = Interval::new(start, Some(end)).unwrap();
//! assert!(trip.overlaps(&Interval::instant(end)));
//! ```

pub mod filters;
pub mod interval;
pub mod notification;
pub mod requests;
pub mod status;
pub mod trailer;
pub mod trip;
pub mod upkeep;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use filters::TripFilter;
pub use interval::{overlaps, parse_instant, Interval};
pub use notification::Notification;
pub use requests::{NewTrip, UpdateTrailerRequest, UpdateVehicleRequest};
pub use status::{
    AlertSeverity, AlertType, EntityClass, TrailerStatus, TripStatus, UserRole, VehicleStatus,
};
pub use trailer::Trailer;
pub use trip::{Trip, TripInterval};
pub use upkeep::{Maintenance, Tire};
pub use user::User;
pub use vehicle::Vehicle;
