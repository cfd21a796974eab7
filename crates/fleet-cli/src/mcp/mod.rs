//! MCP server implementation for the fleet
//!
//! Exposes availability lookups, trip scheduling and the alert workflow as
//! Model Context Protocol tools over stdio. Each tool delegates to
//! [`handlers::McpHandlers`], which shares one [`Fleet`] between calls. Each
//! call opens its own database connection.

use std::sync::Arc;

use anyhow::Result;
use fleet_core::Fleet;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddTire, Availability, CreateTrailer, CreateTrip, CreateUser, CreateVehicle, Id,
    ListNotifications, ListTrailers, ListTrips, ListUsers, ListVehicles, McpResult,
    RecordMaintenance, UpdateTrailer, UpdateTripStatus, UpdateVehicle, VehicleRecords,
};

const INSTRUCTIONS: &str = r#"Fleet manages a road-freight fleet: vehicles, trailers and drivers (users with the 'chauffeur' role), the trips that bind them, and tire/maintenance alerts.

## Time windows
Availability tools and schedule_trip take `startAt` (required) and `endAt` (optional) as RFC 3339 timestamps such as `2024-01-15T08:00:00Z`, or bare dates such as `2024-01-15` (midnight UTC). Without `endAt` the window is the single instant `startAt`. Windows are closed: a trip ending at 12:00 blocks a window starting at 12:00.

## Availability
A resource is free when its status allows assignment (vehicles: active or in_use; trailers: available or in_use; drivers: chauffeur role) and no `planned` or `in_progress` trip using it overlaps the window. Completed and cancelled trips never block.

## Scheduling a trip
1. Call available_vehicles / available_drivers (and available_trailers if needed) for the window
2. Call schedule_trip with the chosen ids; it re-checks overlaps atomically and refuses double bookings
3. Move the trip with update_trip_status: planned → in_progress → completed, or cancel it. Pass `distance_km` when completing to add it to the vehicle's mileage

## Alerts
record_maintenance and add_tire store the mileage at which the next service or check is due. check_alerts compares these with current mileage and notifies every admin once per open alert (critical within half the threshold or overdue, warning within the threshold). Resolve notifications with resolve_notification; a resolved alert can be raised again by a later check.

## Tool Categories
- **Availability**: available_vehicles, available_trailers, available_drivers
- **Trips**: schedule_trip, list_trips, show_trip, update_trip_status
- **Fleet records**: list_vehicles, create_vehicle, update_vehicle, list_trailers, create_trailer, update_trailer, list_users, create_user
- **Upkeep and alerts**: add_tire, list_tires, record_maintenance, list_maintenance, check_alerts, list_notifications, resolve_notification"#;

/// MCP server for the fleet
#[derive(Clone)]
pub struct FleetMcpServer {
    fleet: Arc<Fleet>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl FleetMcpServer {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet: Arc::new(fleet),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.fleet.clone())
    }

    #[tool(
        name = "available_vehicles",
        description = "List vehicles free for a time window. Requires startAt; endAt is optional (defaults to startAt). Returns vehicles whose status is active or in_use and that no planned or in_progress trip uses during the window."
    )]
    async fn available_vehicles(&self, params: Parameters<Availability>) -> McpResult {
        self.handlers().available_vehicles(params).await
    }

    #[tool(
        name = "available_trailers",
        description = "List trailers free for a time window. Requires startAt; endAt is optional. Returns trailers whose status is available or in_use and that no planned or in_progress trip uses during the window."
    )]
    async fn available_trailers(&self, params: Parameters<Availability>) -> McpResult {
        self.handlers().available_trailers(params).await
    }

    #[tool(
        name = "available_drivers",
        description = "List chauffeurs free for a time window. Requires startAt; endAt is optional. Admin accounts are never returned."
    )]
    async fn available_drivers(&self, params: Parameters<Availability>) -> McpResult {
        self.handlers().available_drivers(params).await
    }

    #[tool(
        name = "schedule_trip",
        description = "Schedule a trip for a vehicle, a chauffeur and optionally a trailer between origin and destination. Requires startAt; endAt is optional. Fails if any of the resources is ineligible or already bound to an overlapping planned or in_progress trip. Returns the new trip in 'planned' status."
    )]
    async fn schedule_trip(&self, params: Parameters<CreateTrip>) -> McpResult {
        self.handlers().schedule_trip(params).await
    }

    #[tool(
        name = "list_trips",
        description = "List trips ordered by departure. Optionally filter by status ('planned', 'in_progress', 'completed', 'cancelled'), vehicle_id or driver_id."
    )]
    async fn list_trips(&self, params: Parameters<ListTrips>) -> McpResult {
        self.handlers().list_trips(params).await
    }

    #[tool(
        name = "show_trip",
        description = "Show one trip with its vehicle, trailer, driver, window and status."
    )]
    async fn show_trip(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_trip(params).await
    }

    #[tool(
        name = "update_trip_status",
        description = "Move a trip along its lifecycle: planned → in_progress or cancelled, in_progress → completed or cancelled. Completed and cancelled are final. distance_km is only accepted with status 'completed' and is added to the vehicle's mileage."
    )]
    async fn update_trip_status(&self, params: Parameters<UpdateTripStatus>) -> McpResult {
        self.handlers().update_trip_status(params).await
    }

    #[tool(
        name = "list_vehicles",
        description = "List vehicles, optionally only those in one status ('active', 'in_use', 'maintenance', 'inactive')."
    )]
    async fn list_vehicles(&self, params: Parameters<ListVehicles>) -> McpResult {
        self.handlers().list_vehicles(params).await
    }

    #[tool(
        name = "create_vehicle",
        description = "Register a vehicle with a unique registration, brand, model, optional mileage_km and optional status (default 'active')."
    )]
    async fn create_vehicle(&self, params: Parameters<CreateVehicle>) -> McpResult {
        self.handlers().create_vehicle(params).await
    }

    #[tool(
        name = "update_vehicle",
        description = "Change a vehicle's registration, brand, model, mileage_km or status. Omitted fields are unchanged; at least one must be set."
    )]
    async fn update_vehicle(&self, params: Parameters<UpdateVehicle>) -> McpResult {
        self.handlers().update_vehicle(params).await
    }

    #[tool(
        name = "list_trailers",
        description = "List trailers, optionally only those in one status ('available', 'in_use', 'maintenance', 'inactive')."
    )]
    async fn list_trailers(&self, params: Parameters<ListTrailers>) -> McpResult {
        self.handlers().list_trailers(params).await
    }

    #[tool(
        name = "create_trailer",
        description = "Register a trailer with a unique registration, a kind (e.g. 'flatbed'), optional capacity_kg and optional status (default 'available')."
    )]
    async fn create_trailer(&self, params: Parameters<CreateTrailer>) -> McpResult {
        self.handlers().create_trailer(params).await
    }

    #[tool(
        name = "update_trailer",
        description = "Change a trailer's registration, kind, capacity_kg or status. Omitted fields are unchanged; at least one must be set."
    )]
    async fn update_trailer(&self, params: Parameters<UpdateTrailer>) -> McpResult {
        self.handlers().update_trailer(params).await
    }

    #[tool(
        name = "list_users",
        description = "List user accounts, optionally only one role ('admin' or 'chauffeur')."
    )]
    async fn list_users(&self, params: Parameters<ListUsers>) -> McpResult {
        self.handlers().list_users(params).await
    }

    #[tool(
        name = "create_user",
        description = "Create a user with name, unique email, optional phone and role ('admin' receives alerts, 'chauffeur' can drive trips)."
    )]
    async fn create_user(&self, params: Parameters<CreateUser>) -> McpResult {
        self.handlers().create_user(params).await
    }

    #[tool(
        name = "add_tire",
        description = "Record a tire fitted on a vehicle: position, mileage when fitted, and mileage at which it is due for inspection."
    )]
    async fn add_tire(&self, params: Parameters<AddTire>) -> McpResult {
        self.handlers().add_tire(params).await
    }

    #[tool(
        name = "list_tires",
        description = "List tire records, optionally for one vehicle_id."
    )]
    async fn list_tires(&self, params: Parameters<VehicleRecords>) -> McpResult {
        self.handlers().list_tires(params).await
    }

    #[tool(
        name = "record_maintenance",
        description = "Record a service performed on a vehicle: kind, mileage when performed, mileage at which the next one is due, optional notes. The latest record of each kind drives maintenance alerts."
    )]
    async fn record_maintenance(&self, params: Parameters<RecordMaintenance>) -> McpResult {
        self.handlers().record_maintenance(params).await
    }

    #[tool(
        name = "list_maintenance",
        description = "List maintenance records, optionally for one vehicle_id."
    )]
    async fn list_maintenance(&self, params: Parameters<VehicleRecords>) -> McpResult {
        self.handlers().list_maintenance(params).await
    }

    #[tool(
        name = "check_alerts",
        description = "Compare tire checks and services with current mileage. Notifies every admin once per open alert; repeated checks do not duplicate notifications. Returns all alerts currently due and how many notifications were created."
    )]
    async fn check_alerts(&self) -> McpResult {
        self.handlers().check_alerts().await
    }

    #[tool(
        name = "list_notifications",
        description = "List notifications newest first, optionally for one user_id. Resolved ones are hidden unless include_resolved is true."
    )]
    async fn list_notifications(&self, params: Parameters<ListNotifications>) -> McpResult {
        self.handlers().list_notifications(params).await
    }

    #[tool(
        name = "resolve_notification",
        description = "Mark a notification as handled. A later check_alerts may raise the alert again if it is still due."
    )]
    async fn resolve_notification(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().resolve_notification(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for FleetMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fleet".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: FleetMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting fleet MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
