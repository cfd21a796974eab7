//! Availability resolution for vehicles, trailers and drivers.
//!
//! A resource is available for a window when its lifecycle state allows
//! assignment and no occupying trip (`planned` or `in_progress`) binding it
//! overlaps the window. Overlap uses closed intervals, so a trip ending at
//! 12:00 blocks a window starting at 12:00.
//!
//! The functions here are pure: the database layer loads candidate trips and
//! eligible resources, and this module decides.
//!
//! ```rust
//! use fleet_core::availability::busy_ids;
//! use fleet_core::models::{EntityClass, Interval, TripInterval, TripStatus};
//! use jiff::Timestamp;
//!
//! let at = |s: &str| s.parse::<Timestamp>().unwrap();
//! let trip = TripInterval {
//!     trip_id: 1,
//!     vehicle_id: 7,
//!     trailer_id: None,
//!     driver_id: 3,
//!     interval: Interval::new(at("2024-01-15T08:00:00Z"), Some(at("2024-01-15T18:00:00Z"))).unwrap(),
//!     status: TripStatus::Planned,
//! };
//! let window = Interval::new(at("2024-01-15T10:00:00Z"), Some(at("2024-01-15T12:00:00Z"))).unwrap();
//!
//! let busy = busy_ids(&[trip], EntityClass::Vehicle, &window);
//! assert!(busy.contains(&7));
//! assert!(busy_ids(&[trip], EntityClass::Trailer, &window).is_empty());
//! ```

use std::collections::BTreeSet;

use crate::models::{EntityClass, Interval, Trailer, TripInterval, User, Vehicle};

/// A resource a trip can bind.
pub trait Assignable {
    /// Which kind of resource this is.
    const CLASS: EntityClass;

    /// Storage identifier.
    fn id(&self) -> u64;

    /// Whether the lifecycle state permits a new assignment.
    fn is_eligible(&self) -> bool;
}

impl Assignable for Vehicle {
    const CLASS: EntityClass = EntityClass::Vehicle;

    fn id(&self) -> u64 {
        self.id
    }

    fn is_eligible(&self) -> bool {
        self.status.is_eligible()
    }
}

impl Assignable for Trailer {
    const CLASS: EntityClass = EntityClass::Trailer;

    fn id(&self) -> u64 {
        self.id
    }

    fn is_eligible(&self) -> bool {
        self.status.is_eligible()
    }
}

impl Assignable for User {
    const CLASS: EntityClass = EntityClass::Driver;

    fn id(&self) -> u64 {
        self.id
    }

    // Drivers carry no lifecycle state; the role is the only gate.
    fn is_eligible(&self) -> bool {
        self.is_driver()
    }
}

/// Distinct ids of `class` resources bound by an occupying trip that
/// overlaps `window`.
pub fn busy_ids<'a, I>(trips: I, class: EntityClass, window: &Interval) -> BTreeSet<u64>
where
    I: IntoIterator<Item = &'a TripInterval>,
{
    trips
        .into_iter()
        .filter(|trip| trip.status.is_occupying() && trip.interval.overlaps(window))
        .filter_map(|trip| trip.entity_id(class))
        .collect()
}

/// Keeps the eligible resources that no occupying trip binds during
/// `window`, preserving input order.
pub fn resolve<E: Assignable>(candidates: Vec<E>, trips: &[TripInterval], window: &Interval) -> Vec<E> {
    let busy = busy_ids(trips, E::CLASS, window);
    candidates
        .into_iter()
        .filter(|e| e.is_eligible() && !busy.contains(&e.id()))
        .collect()
}

/// The first occupying trip that binds resource `id` of `class` during
/// `window`, if any.
pub fn first_conflict(
    trips: &[TripInterval],
    class: EntityClass,
    id: u64,
    window: &Interval,
) -> Option<u64> {
    trips
        .iter()
        .filter(|trip| trip.status.is_occupying() && trip.entity_id(class) == Some(id))
        .find(|trip| trip.interval.overlaps(window))
        .map(|trip| trip.trip_id)
}
