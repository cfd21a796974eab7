//! MCP tool handlers implementation

use std::sync::Arc;

use fleet_core::{
    display::{CreateResult, OperationStatus, UpdateResult},
    models::EntityClass,
    params as core, Fleet,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper
// ============================================================================
//
// Core parameter types derive serde and (behind the `schema` feature)
// JsonSchema. The transparent wrapper gives every tool one uniform parameter
// type and keeps the MCP naming local to this crate.

/// Generic MCP wrapper for core parameter types.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateVehicle = McpParams<core::CreateVehicle>;
pub type UpdateVehicle = McpParams<core::UpdateVehicle>;
pub type ListVehicles = McpParams<core::ListVehicles>;
pub type CreateTrailer = McpParams<core::CreateTrailer>;
pub type UpdateTrailer = McpParams<core::UpdateTrailer>;
pub type ListTrailers = McpParams<core::ListTrailers>;
pub type CreateUser = McpParams<core::CreateUser>;
pub type ListUsers = McpParams<core::ListUsers>;
pub type Availability = McpParams<core::Availability>;
pub type CreateTrip = McpParams<core::CreateTrip>;
pub type ListTrips = McpParams<core::ListTrips>;
pub type UpdateTripStatus = McpParams<core::UpdateTripStatus>;
pub type AddTire = McpParams<core::AddTire>;
pub type RecordMaintenance = McpParams<core::RecordMaintenance>;
pub type VehicleRecords = McpParams<core::VehicleRecords>;
pub type ListNotifications = McpParams<core::ListNotifications>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

fn not_found(kind: &str, id: u64) -> ErrorData {
    ErrorData::invalid_params(format!("{kind} with ID {id} not found"), None)
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    fleet: Arc<Fleet>,
}

impl McpHandlers {
    pub fn new(fleet: Arc<Fleet>) -> Self {
        Self { fleet }
    }

    async fn available(&self, class: EntityClass, params: &core::Availability) -> McpResult {
        debug!("available_{class}s: {params:?}");

        let available = self
            .fleet
            .find_available(class, params)
            .await
            .map_err(|e| to_mcp_error(&format!("Failed to list available {class}s"), &e))?;

        text(format!(
            "# {} available {class}(s)\n\n{available}",
            available.len()
        ))
    }

    pub async fn available_vehicles(
        &self,
        Parameters(params): Parameters<Availability>,
    ) -> McpResult {
        self.available(EntityClass::Vehicle, params.as_ref()).await
    }

    pub async fn available_trailers(
        &self,
        Parameters(params): Parameters<Availability>,
    ) -> McpResult {
        self.available(EntityClass::Trailer, params.as_ref()).await
    }

    pub async fn available_drivers(
        &self,
        Parameters(params): Parameters<Availability>,
    ) -> McpResult {
        self.available(EntityClass::Driver, params.as_ref()).await
    }

    pub async fn schedule_trip(&self, Parameters(params): Parameters<CreateTrip>) -> McpResult {
        debug!("schedule_trip: {:?}", params);

        let trip = self
            .fleet
            .schedule_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to schedule trip", &e))?;
        text(CreateResult::new(trip))
    }

    pub async fn list_trips(&self, Parameters(params): Parameters<ListTrips>) -> McpResult {
        debug!("list_trips: {:?}", params);

        let trips = self
            .fleet
            .list_trips(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list trips", &e))?;
        text(trips)
    }

    pub async fn show_trip(&self, Parameters(params): Parameters<Id>) -> McpResult {
        let id = params.as_ref().id;
        let trip = self
            .fleet
            .get_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get trip", &e))?
            .ok_or_else(|| not_found("Trip", id))?;
        text(trip)
    }

    pub async fn update_trip_status(
        &self,
        Parameters(params): Parameters<UpdateTripStatus>,
    ) -> McpResult {
        debug!("update_trip_status: {:?}", params);

        let inner = params.as_ref();
        let trip = self
            .fleet
            .update_trip_status(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to update trip status", &e))?;

        let mut changes = vec![format!("status: {}", trip.status)];
        if let Some(distance) = inner.distance_km {
            changes.push(format!("vehicle {} mileage: +{distance} km", trip.vehicle_id));
        }
        text(UpdateResult::with_changes(trip, changes))
    }

    pub async fn list_vehicles(&self, Parameters(params): Parameters<ListVehicles>) -> McpResult {
        let vehicles = self
            .fleet
            .list_vehicles(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list vehicles", &e))?;
        text(vehicles)
    }

    pub async fn create_vehicle(
        &self,
        Parameters(params): Parameters<CreateVehicle>,
    ) -> McpResult {
        debug!("create_vehicle: {:?}", params);

        let vehicle = self
            .fleet
            .create_vehicle(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create vehicle", &e))?;
        text(CreateResult::new(vehicle))
    }

    pub async fn update_vehicle(
        &self,
        Parameters(params): Parameters<UpdateVehicle>,
    ) -> McpResult {
        debug!("update_vehicle: {:?}", params);

        let id = params.as_ref().id;
        let vehicle = self
            .fleet
            .update_vehicle(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update vehicle", &e))?
            .ok_or_else(|| not_found("Vehicle", id))?;
        text(UpdateResult::new(vehicle))
    }

    pub async fn list_trailers(&self, Parameters(params): Parameters<ListTrailers>) -> McpResult {
        let trailers = self
            .fleet
            .list_trailers(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list trailers", &e))?;
        text(trailers)
    }

    pub async fn create_trailer(
        &self,
        Parameters(params): Parameters<CreateTrailer>,
    ) -> McpResult {
        debug!("create_trailer: {:?}", params);

        let trailer = self
            .fleet
            .create_trailer(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create trailer", &e))?;
        text(CreateResult::new(trailer))
    }

    pub async fn update_trailer(
        &self,
        Parameters(params): Parameters<UpdateTrailer>,
    ) -> McpResult {
        debug!("update_trailer: {:?}", params);

        let id = params.as_ref().id;
        let trailer = self
            .fleet
            .update_trailer(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update trailer", &e))?
            .ok_or_else(|| not_found("Trailer", id))?;
        text(UpdateResult::new(trailer))
    }

    pub async fn list_users(&self, Parameters(params): Parameters<ListUsers>) -> McpResult {
        let users = self
            .fleet
            .list_users(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list users", &e))?;
        text(users)
    }

    pub async fn create_user(&self, Parameters(params): Parameters<CreateUser>) -> McpResult {
        debug!("create_user: {:?}", params);

        let user = self
            .fleet
            .create_user(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create user", &e))?;
        text(CreateResult::new(user))
    }

    pub async fn add_tire(&self, Parameters(params): Parameters<AddTire>) -> McpResult {
        debug!("add_tire: {:?}", params);

        let tire = self
            .fleet
            .add_tire(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add tire", &e))?;
        text(CreateResult::new(tire))
    }

    pub async fn list_tires(&self, Parameters(params): Parameters<VehicleRecords>) -> McpResult {
        let tires = self
            .fleet
            .list_tires(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list tires", &e))?;
        text(tires)
    }

    pub async fn record_maintenance(
        &self,
        Parameters(params): Parameters<RecordMaintenance>,
    ) -> McpResult {
        debug!("record_maintenance: {:?}", params);

        let record = self
            .fleet
            .record_maintenance(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record maintenance", &e))?;
        text(CreateResult::new(record))
    }

    pub async fn list_maintenance(
        &self,
        Parameters(params): Parameters<VehicleRecords>,
    ) -> McpResult {
        let log = self
            .fleet
            .list_maintenance(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list maintenance", &e))?;
        text(log)
    }

    pub async fn check_alerts(&self) -> McpResult {
        let report = self
            .fleet
            .check_alerts()
            .await
            .map_err(|e| to_mcp_error("Failed to check alerts", &e))?;
        text(report)
    }

    pub async fn list_notifications(
        &self,
        Parameters(params): Parameters<ListNotifications>,
    ) -> McpResult {
        let notifications = self
            .fleet
            .list_notifications(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list notifications", &e))?;
        text(notifications)
    }

    pub async fn resolve_notification(&self, Parameters(params): Parameters<Id>) -> McpResult {
        let id = params.as_ref().id;
        let resolved = self
            .fleet
            .resolve_notification(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to resolve notification", &e))?;

        let status = if resolved {
            OperationStatus::success(format!("Resolved notification {id}"))
        } else {
            OperationStatus::failure(format!("Notification {id} was already resolved"))
        };
        text(status)
    }
}
