//! Vehicle model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::VehicleStatus;

/// A tractor unit or truck of the fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    /// Unique identifier for the vehicle
    pub id: u64,

    /// Registration plate, unique across the fleet
    pub registration: String,

    /// Manufacturer
    pub brand: String,

    /// Model name
    pub model: String,

    /// Odometer reading in kilometres
    pub mileage_km: u64,

    /// Lifecycle state
    #[serde(default)]
    pub status: VehicleStatus,

    /// Timestamp when the vehicle was registered (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the vehicle was last modified (UTC)
    pub updated_at: Timestamp,
}
