//! Parameter structures for fleet operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation is enabled
//! through the `schema` feature for the MCP server.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap or convert into these types; `validate` methods turn
//! them into the checked request types the database layer accepts.
//!
//! Lifecycle fields are typed with the closed enums from [`crate::models`],
//! so an unknown status string is rejected while deserializing (MCP) or
//! parsing arguments (CLI).

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{FleetError, Result},
    models::{
        Interval, NewTrip, TrailerStatus, TripStatus, UpdateTrailerRequest, UpdateVehicleRequest,
        UserRole, VehicleStatus,
    },
};

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::invalid_input(field).with_reason(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn storable(field: &str, value: u64) -> Result<()> {
    if i64::try_from(value).is_err() {
        return Err(FleetError::invalid_input(field)
            .with_reason(format!("{field} cannot exceed {}", i64::MAX)));
    }
    Ok(())
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for registering a vehicle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateVehicle {
    /// Registration plate, unique across the fleet
    pub registration: String,
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Current odometer reading in kilometres
    #[serde(default)]
    pub mileage_km: u64,
    /// Initial status, `active` when omitted
    #[serde(default)]
    pub status: Option<VehicleStatus>,
}

impl CreateVehicle {
    /// Checks the required text fields.
    pub fn validate(&self) -> Result<()> {
        require("registration", &self.registration)?;
        require("brand", &self.brand)?;
        require("model", &self.model)?;
        storable("mileage_km", self.mileage_km)
    }
}

/// Parameters for updating a vehicle. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateVehicle {
    /// Vehicle ID to update
    pub id: u64,
    pub registration: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    /// New odometer reading in kilometres
    pub mileage_km: Option<u64>,
    /// New status ('active', 'in_use', 'maintenance' or 'inactive')
    pub status: Option<VehicleStatus>,
}

impl UpdateVehicle {
    /// Turns the parameters into an update request.
    ///
    /// # Errors
    ///
    /// * `FleetError::InvalidInput` - When no field is set, or a text field
    ///   is blank
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleet_core::{models::VehicleStatus, params::UpdateVehicle};
    ///
    /// let params = UpdateVehicle {
    ///     id: 1,
    ///     status: Some(VehicleStatus::Maintenance),
    ///     ..Default::default()
    /// };
    /// let request = params.validate()?;
    /// assert_eq!(request.status, Some(VehicleStatus::Maintenance));
    ///
    /// assert!(UpdateVehicle { id: 1, ..Default::default() }.validate().is_err());
    /// # fleet_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<UpdateVehicleRequest> {
        for (field, value) in [
            ("registration", &self.registration),
            ("brand", &self.brand),
            ("model", &self.model),
        ] {
            if let Some(value) = value {
                require(field, value)?;
            }
        }
        if let Some(mileage_km) = self.mileage_km {
            storable("mileage_km", mileage_km)?;
        }

        let request = UpdateVehicleRequest {
            registration: self.registration.clone(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            mileage_km: self.mileage_km,
            status: self.status,
        };
        if request.is_empty() {
            return Err(FleetError::invalid_input("id")
                .with_reason("nothing to update; set at least one field"));
        }
        Ok(request)
    }
}

/// Parameters for listing vehicles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListVehicles {
    /// Only vehicles in this status
    pub status: Option<VehicleStatus>,
}

/// Parameters for registering a trailer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTrailer {
    /// Registration plate, unique across the fleet
    pub registration: String,
    /// Body type, e.g. 'flatbed' or 'reefer'
    pub kind: String,
    /// Payload capacity in kilograms
    pub capacity_kg: Option<u64>,
    /// Initial status, `available` when omitted
    #[serde(default)]
    pub status: Option<TrailerStatus>,
}

impl CreateTrailer {
    /// Checks the required text fields.
    pub fn validate(&self) -> Result<()> {
        require("registration", &self.registration)?;
        require("kind", &self.kind)
    }
}

/// Parameters for updating a trailer. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTrailer {
    /// Trailer ID to update
    pub id: u64,
    pub registration: Option<String>,
    pub kind: Option<String>,
    pub capacity_kg: Option<u64>,
    /// New status ('available', 'in_use', 'maintenance' or 'inactive')
    pub status: Option<TrailerStatus>,
}

impl UpdateTrailer {
    /// Turns the parameters into an update request.
    pub fn validate(&self) -> Result<UpdateTrailerRequest> {
        if let Some(registration) = &self.registration {
            require("registration", registration)?;
        }
        if let Some(kind) = &self.kind {
            require("kind", kind)?;
        }
        if self.registration.is_none()
            && self.kind.is_none()
            && self.capacity_kg.is_none()
            && self.status.is_none()
        {
            return Err(FleetError::invalid_input("id")
                .with_reason("nothing to update; set at least one field"));
        }

        Ok(UpdateTrailerRequest {
            registration: self.registration.clone(),
            kind: self.kind.clone(),
            capacity_kg: self.capacity_kg,
            status: self.status,
        })
    }
}

/// Parameters for listing trailers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTrailers {
    /// Only trailers in this status
    pub status: Option<TrailerStatus>,
}

/// Parameters for creating a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateUser {
    /// Full name
    pub name: String,
    /// Email address, unique across users
    pub email: String,
    /// Phone number
    pub phone: Option<String>,
    /// 'admin' receives alerts, 'chauffeur' drives trips
    pub role: UserRole,
}

impl CreateUser {
    /// Checks the required fields and the email shape.
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(FleetError::invalid_input("email")
                .with_reason(format!("'{}' is not an email address", self.email)));
        }
        Ok(())
    }
}

/// Parameters for listing users.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListUsers {
    /// Only users with this role
    pub role: Option<UserRole>,
}

/// Parameters for scheduling a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTrip {
    pub vehicle_id: u64,
    /// Optional trailer hitched for the trip
    pub trailer_id: Option<u64>,
    /// User ID of the driver; must have the 'chauffeur' role
    pub driver_id: u64,
    pub origin: String,
    pub destination: String,
    /// Departure, e.g. '2024-01-15T08:00:00Z' or '2024-01-15'
    #[serde(rename = "startAt", alias = "start_at")]
    pub start_at: Option<String>,
    /// Arrival; when omitted the trip occupies the single instant startAt
    #[serde(rename = "endAt", alias = "end_at", default)]
    pub end_at: Option<String>,
}

impl CreateTrip {
    /// Parses the window and checks the places.
    ///
    /// # Errors
    ///
    /// * `FleetError::InvalidInput` - When startAt is missing, a bound is not
    ///   a date, endAt precedes startAt, or a place is blank
    pub fn validate(&self) -> Result<NewTrip> {
        let window = Interval::parse(self.start_at.as_deref(), self.end_at.as_deref())?;
        require("origin", &self.origin)?;
        require("destination", &self.destination)?;
        let has_end = self.end_at.as_deref().is_some_and(|s| !s.trim().is_empty());

        Ok(NewTrip {
            vehicle_id: self.vehicle_id,
            trailer_id: self.trailer_id,
            driver_id: self.driver_id,
            origin: self.origin.trim().to_string(),
            destination: self.destination.trim().to_string(),
            start_at: window.start,
            end_at: has_end.then_some(window.end),
        })
    }
}

/// Parameters for listing trips.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTrips {
    /// Only trips in this status
    pub status: Option<TripStatus>,
    /// Only trips run by this vehicle
    pub vehicle_id: Option<u64>,
    /// Only trips driven by this user
    pub driver_id: Option<u64>,
}

/// Parameters for moving a trip along its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTripStatus {
    /// Trip ID
    pub id: u64,
    /// Target status ('in_progress', 'completed' or 'cancelled')
    pub status: TripStatus,
    /// Distance driven; only accepted when completing, and added to the
    /// vehicle's mileage
    #[serde(default)]
    pub distance_km: Option<u64>,
}

/// Time window for availability queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Availability {
    /// Window start, e.g. '2024-01-15T08:00:00Z' or '2024-01-15' (required)
    #[serde(rename = "startAt", alias = "start_at", default)]
    pub start_at: Option<String>,
    /// Window end; when omitted the window is the single instant startAt
    #[serde(rename = "endAt", alias = "end_at", default)]
    pub end_at: Option<String>,
}

impl Availability {
    /// Parses the window.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fleet_core::{params::Availability, FleetError};
    ///
    /// let params = Availability { start_at: None, end_at: None };
    /// match params.window() {
    ///     Err(FleetError::InvalidInput { field, reason }) => {
    ///         assert_eq!(field, "startAt");
    ///         assert_eq!(reason, "startAt est obligatoire");
    ///     }
    ///     other => panic!("unexpected: {other:?}"),
    /// }
    /// ```
    pub fn window(&self) -> Result<Interval> {
        Interval::parse(self.start_at.as_deref(), self.end_at.as_deref())
    }
}

/// Parameters for fitting a tire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddTire {
    pub vehicle_id: u64,
    /// Wheel position, e.g. 'front-left'
    pub position: String,
    /// Odometer reading when fitted
    pub installed_at_km: u64,
    /// Odometer reading at which the tire is due for inspection
    pub next_check_km: u64,
}

impl AddTire {
    pub fn validate(&self) -> Result<()> {
        require("position", &self.position)?;
        storable("next_check_km", self.next_check_km)?;
        if self.next_check_km < self.installed_at_km {
            return Err(FleetError::invalid_input("next_check_km")
                .with_reason("next check cannot come before installation"));
        }
        Ok(())
    }
}

/// Parameters for recording a service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordMaintenance {
    pub vehicle_id: u64,
    /// Kind of service, e.g. 'oil change'
    pub kind: String,
    /// Odometer reading when performed
    pub performed_at_km: u64,
    /// Odometer reading at which the next service of this kind is due
    pub next_service_km: u64,
    pub notes: Option<String>,
}

impl RecordMaintenance {
    pub fn validate(&self) -> Result<()> {
        require("kind", &self.kind)?;
        storable("next_service_km", self.next_service_km)?;
        if self.next_service_km < self.performed_at_km {
            return Err(FleetError::invalid_input("next_service_km")
                .with_reason("next service cannot come before this one"));
        }
        Ok(())
    }
}

/// Parameters for listing tire or maintenance records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VehicleRecords {
    /// Only records of this vehicle; all vehicles when omitted
    pub vehicle_id: Option<u64>,
}

/// Parameters for listing notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListNotifications {
    /// Only notifications addressed to this user
    pub user_id: Option<u64>,
    /// Include notifications that were already resolved
    #[serde(default)]
    pub include_resolved: bool,
}
