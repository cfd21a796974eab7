//! Tire and maintenance records that drive mileage alerts.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A tire mounted on a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tire {
    pub id: u64,
    pub vehicle_id: u64,

    /// Mounting position, e.g. `front-left`, `rear-axle-2-inner`
    pub position: String,

    /// Vehicle mileage when the tire was mounted
    pub installed_at_km: u64,

    /// Vehicle mileage at which the tire must be inspected
    pub next_check_km: u64,

    pub created_at: Timestamp,
}

/// A service performed on a vehicle and when the next one is due.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Maintenance {
    pub id: u64,
    pub vehicle_id: u64,

    /// Type of service, e.g. `oil change`, `brakes`
    pub kind: String,

    /// Vehicle mileage when the service was done
    pub performed_at_km: u64,

    /// Vehicle mileage at which the next service is due
    pub next_service_km: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: Timestamp,
}
