//! Status enumerations for vehicles, trailers, users, trips and alerts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum VehicleStatus {
    /// Vehicle is in service and free to take trips
    #[default]
    Active,

    /// Vehicle is currently running a trip
    InUse,

    /// Vehicle is at the garage
    Maintenance,

    /// Vehicle is out of the fleet
    Inactive,
}

impl VehicleStatus {
    /// All variants, in declaration order.
    pub const ALL: [VehicleStatus; 4] = [
        VehicleStatus::Active,
        VehicleStatus::InUse,
        VehicleStatus::Maintenance,
        VehicleStatus::Inactive,
    ];

    /// Statuses a vehicle may be in to receive a new trip.
    pub const ELIGIBLE: [VehicleStatus; 2] = [VehicleStatus::Active, VehicleStatus::InUse];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::InUse => "in_use",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Inactive => "inactive",
        }
    }

    /// Whether a vehicle in this state can be assigned to a trip.
    pub fn is_eligible(&self) -> bool {
        Self::ELIGIBLE.contains(self)
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(VehicleStatus::Active),
            "in_use" | "inuse" => Ok(VehicleStatus::InUse),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            "inactive" => Ok(VehicleStatus::Inactive),
            _ => Err(format!("Invalid vehicle status: {s}")),
        }
    }
}

/// Lifecycle state of a trailer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum TrailerStatus {
    /// Trailer is parked and free
    #[default]
    Available,

    /// Trailer is hitched to a running trip
    InUse,

    /// Trailer is being repaired
    Maintenance,

    /// Trailer is out of the fleet
    Inactive,
}

impl TrailerStatus {
    /// All variants, in declaration order.
    pub const ALL: [TrailerStatus; 4] = [
        TrailerStatus::Available,
        TrailerStatus::InUse,
        TrailerStatus::Maintenance,
        TrailerStatus::Inactive,
    ];

    /// Statuses a trailer may be in to receive a new trip.
    pub const ELIGIBLE: [TrailerStatus; 2] = [TrailerStatus::Available, TrailerStatus::InUse];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TrailerStatus::Available => "available",
            TrailerStatus::InUse => "in_use",
            TrailerStatus::Maintenance => "maintenance",
            TrailerStatus::Inactive => "inactive",
        }
    }

    /// Whether a trailer in this state can be assigned to a trip.
    pub fn is_eligible(&self) -> bool {
        Self::ELIGIBLE.contains(self)
    }
}

impl FromStr for TrailerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(TrailerStatus::Available),
            "in_use" | "inuse" => Ok(TrailerStatus::InUse),
            "maintenance" => Ok(TrailerStatus::Maintenance),
            "inactive" => Ok(TrailerStatus::Inactive),
            _ => Err(format!("Invalid trailer status: {s}")),
        }
    }
}

/// Role of a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum UserRole {
    /// Back-office user; receives alerts
    Admin,

    /// Driver; can be assigned to trips
    Chauffeur,
}

impl UserRole {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Chauffeur => "chauffeur",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "chauffeur" | "driver" => Ok(UserRole::Chauffeur),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// Lifecycle state of a trip.
///
/// Transitions follow a fixed table:
///
/// ```text
/// planned ──▶ in_progress ──▶ completed
///    │             │
///    └──────┬──────┘
///           ▼
///       cancelled
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum TripStatus {
    /// Scheduled, not started
    #[default]
    Planned,

    /// On the road
    InProgress,

    /// Arrived
    Completed,

    /// Called off before completion
    Cancelled,
}

impl TripStatus {
    /// Statuses that make the trip's vehicle, trailer and driver unavailable.
    pub const OCCUPYING: [TripStatus; 2] = [TripStatus::Planned, TripStatus::InProgress];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::InProgress => "in_progress",
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a trip in this state blocks its resources.
    pub fn is_occupying(&self) -> bool {
        Self::OCCUPYING.contains(self)
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }

    /// Whether the lifecycle allows moving from `self` to `next`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleet_core::models::TripStatus;
    ///
    /// assert!(TripStatus::Planned.can_transition_to(TripStatus::InProgress));
    /// assert!(!TripStatus::Planned.can_transition_to(TripStatus::Completed));
    /// assert!(!TripStatus::Completed.can_transition_to(TripStatus::Cancelled));
    /// ```
    pub fn can_transition_to(&self, next: TripStatus) -> bool {
        use TripStatus::*;
        matches!(
            (*self, next),
            (Planned, InProgress)
                | (Planned, Cancelled)
                | (InProgress, Completed)
                | (InProgress, Cancelled)
        )
    }
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(TripStatus::Planned),
            "in_progress" | "inprogress" => Ok(TripStatus::InProgress),
            "completed" => Ok(TripStatus::Completed),
            "cancelled" | "canceled" => Ok(TripStatus::Cancelled),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

/// Kind of alert raised on a vehicle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum AlertType {
    /// A tire is close to its next inspection mileage
    TireCheck,

    /// A service is close to its due mileage
    MaintenanceDue,
}

impl AlertType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::TireCheck => "tire_check",
            AlertType::MaintenanceDue => "maintenance_due",
        }
    }
}

impl FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tire_check" => Ok(AlertType::TireCheck),
            "maintenance_due" => Ok(AlertType::MaintenanceDue),
            _ => Err(format!("Invalid alert type: {s}")),
        }
    }
}

/// How urgent an alert is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum AlertSeverity {
    /// Within the threshold
    Warning,

    /// Within half the threshold, or overdue
    Critical,
}

impl AlertSeverity {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Warning => "warning",
            AlertSeverity::Critical => "critical",
        }
    }

    /// Severity with a leading marker for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            AlertSeverity::Warning => "⚠ Warning",
            AlertSeverity::Critical => "✖ Critical",
        }
    }
}

impl FromStr for AlertSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warning" => Ok(AlertSeverity::Warning),
            "critical" => Ok(AlertSeverity::Critical),
            _ => Err(format!("Invalid alert severity: {s}")),
        }
    }
}

/// The three kinds of resource a trip binds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum EntityClass {
    Vehicle,
    Trailer,
    Driver,
}

impl EntityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityClass::Vehicle => "vehicle",
            EntityClass::Trailer => "trailer",
            EntityClass::Driver => "driver",
        }
    }
}
