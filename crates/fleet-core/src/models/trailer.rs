//! Trailer model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::TrailerStatus;

/// A trailer that can be hitched to a vehicle for a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trailer {
    pub id: u64,

    /// Registration plate, unique across the fleet
    pub registration: String,

    /// Body type (tanker, flatbed, refrigerated, ...)
    pub kind: String,

    /// Payload capacity in kilograms, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_kg: Option<u64>,

    #[serde(default)]
    pub status: TrailerStatus,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
