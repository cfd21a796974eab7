//! Filter types for querying trips.

use super::TripStatus;

/// Filter options for listing trips. Empty filter lists every trip.
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    /// Only trips in this state
    pub status: Option<TripStatus>,

    /// Only trips run by this vehicle
    pub vehicle_id: Option<u64>,

    /// Only trips driven by this user
    pub driver_id: Option<u64>,
}

impl From<&crate::params::ListTrips> for TripFilter {
    fn from(params: &crate::params::ListTrips) -> Self {
        Self {
            status: params.status,
            vehicle_id: params.vehicle_id,
            driver_id: params.driver_id,
        }
    }
}
