//! Validated request types handed to the database layer.

use jiff::Timestamp;

use super::{Interval, TrailerStatus, VehicleStatus};

/// Partial update of a vehicle; `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateVehicleRequest {
    pub registration: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub mileage_km: Option<u64>,
    pub status: Option<VehicleStatus>,
}

impl UpdateVehicleRequest {
    /// Whether the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self.registration.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.mileage_km.is_none()
            && self.status.is_none()
    }
}

/// Partial update of a trailer; `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct UpdateTrailerRequest {
    pub registration: Option<String>,
    pub kind: Option<String>,
    pub capacity_kg: Option<u64>,
    pub status: Option<TrailerStatus>,
}

/// A trip ready to be scheduled, with its window already parsed and checked.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub vehicle_id: u64,
    pub trailer_id: Option<u64>,
    pub driver_id: u64,
    pub origin: String,
    pub destination: String,
    pub start_at: Timestamp,
    pub end_at: Option<Timestamp>,
}

impl NewTrip {
    /// The closed window the trip will occupy.
    pub fn interval(&self) -> Interval {
        Interval {
            start: self.start_at,
            end: self.end_at.unwrap_or(self.start_at),
        }
    }
}
