//! Trip model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{EntityClass, Interval, TripStatus};

/// A scheduled journey binding a vehicle, an optional trailer and a driver
/// over a time window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier for the trip
    pub id: u64,

    /// Vehicle running the trip
    pub vehicle_id: u64,

    /// Trailer hitched for the trip, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailer_id: Option<u64>,

    /// Driver (a user with the chauffeur role)
    pub driver_id: u64,

    /// Departure place
    pub origin: String,

    /// Arrival place
    pub destination: String,

    /// Scheduled departure (UTC)
    pub start_at: Timestamp,

    /// Scheduled arrival (UTC); absent means a point interval at `start_at`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<Timestamp>,

    /// Current lifecycle state
    #[serde(default)]
    pub status: TripStatus,

    /// Distance driven, recorded on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<u64>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Trip {
    /// The closed window this trip occupies.
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start_at,
            end: self.end_at.unwrap_or(self.start_at),
        }
    }
}

/// The slice of a trip that availability decisions need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripInterval {
    pub trip_id: u64,
    pub vehicle_id: u64,
    pub trailer_id: Option<u64>,
    pub driver_id: u64,
    pub interval: Interval,
    pub status: TripStatus,
}

impl TripInterval {
    /// The id of the resource of `class` bound by this trip.
    pub fn entity_id(&self, class: EntityClass) -> Option<u64> {
        match class {
            EntityClass::Vehicle => Some(self.vehicle_id),
            EntityClass::Trailer => self.trailer_id,
            EntityClass::Driver => Some(self.driver_id),
        }
    }
}

impl From<&Trip> for TripInterval {
    fn from(trip: &Trip) -> Self {
        Self {
            trip_id: trip.id,
            vehicle_id: trip.vehicle_id,
            trailer_id: trip.trailer_id,
            driver_id: trip.driver_id,
            interval: trip.interval(),
            status: trip.status,
        }
    }
}
