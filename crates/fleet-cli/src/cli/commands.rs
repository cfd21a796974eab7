//! Command-line argument definitions using clap.
//!
//! Each argument struct mirrors a parameter type from [`fleet_core::params`]
//! and converts into it with `From`, so clap attributes never leak into the
//! core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Fleet
//! ```
//!
//! Lifecycle options (`--status`, `--role`) are parsed with the core enums'
//! `FromStr` implementations, so a typo fails at argument parsing.

use clap::{Args, Subcommand};
use fleet_core::{
    models::{TrailerStatus, TripStatus, UserRole, VehicleStatus},
    params::*,
};

/// A time window given on the command line.
#[derive(Args)]
pub struct WindowArgs {
    /// Window start, e.g. 2024-01-15T08:00:00Z or 2024-01-15
    #[arg(long)]
    pub start_at: Option<String>,

    /// Window end; omit to ask about the single instant --start-at
    #[arg(long)]
    pub end_at: Option<String>,
}

impl From<WindowArgs> for Availability {
    fn from(val: WindowArgs) -> Self {
        Availability {
            start_at: val.start_at,
            end_at: val.end_at,
        }
    }
}

/// Identifies a record to show.
#[derive(Args)]
pub struct IdArgs {
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Deletes a record permanently.
#[derive(Args)]
pub struct DeleteArgs {
    pub id: u64,

    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

// ============================================================================
// Vehicles
// ============================================================================

/// Register a vehicle
#[derive(Args)]
pub struct CreateVehicleArgs {
    /// Registration plate, unique across the fleet
    pub registration: String,

    #[arg(long)]
    pub brand: String,

    #[arg(long)]
    pub model: String,

    /// Current odometer reading in km
    #[arg(long, default_value_t = 0)]
    pub mileage_km: u64,

    /// active, in_use, maintenance or inactive (default: active)
    #[arg(long)]
    pub status: Option<VehicleStatus>,
}

impl From<CreateVehicleArgs> for CreateVehicle {
    fn from(val: CreateVehicleArgs) -> Self {
        CreateVehicle {
            registration: val.registration,
            brand: val.brand,
            model: val.model,
            mileage_km: val.mileage_km,
            status: val.status,
        }
    }
}

/// Change a vehicle's details or status
#[derive(Args)]
pub struct UpdateVehicleArgs {
    pub id: u64,

    #[arg(long)]
    pub registration: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    /// New odometer reading in km
    #[arg(long)]
    pub mileage_km: Option<u64>,

    /// active, in_use, maintenance or inactive
    #[arg(long)]
    pub status: Option<VehicleStatus>,
}

impl From<UpdateVehicleArgs> for UpdateVehicle {
    fn from(val: UpdateVehicleArgs) -> Self {
        UpdateVehicle {
            id: val.id,
            registration: val.registration,
            brand: val.brand,
            model: val.model,
            mileage_km: val.mileage_km,
            status: val.status,
        }
    }
}

#[derive(Args)]
pub struct ListVehiclesArgs {
    /// Only vehicles in this status
    #[arg(long)]
    pub status: Option<VehicleStatus>,
}

impl From<ListVehiclesArgs> for ListVehicles {
    fn from(val: ListVehiclesArgs) -> Self {
        ListVehicles { status: val.status }
    }
}

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Register a new vehicle
    #[command(alias = "add")]
    Create(CreateVehicleArgs),
    /// List vehicles
    #[command(alias = "ls")]
    List(ListVehiclesArgs),
    /// Show one vehicle
    Show(IdArgs),
    /// Change a vehicle's details or status
    Update(UpdateVehicleArgs),
    /// Delete a vehicle that never ran a trip
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// List vehicles free during a window
    Available(WindowArgs),
}

// ============================================================================
// Trailers
// ============================================================================

#[derive(Args)]
pub struct CreateTrailerArgs {
    /// Registration plate, unique across the fleet
    pub registration: String,

    /// Body type, e.g. flatbed or reefer
    #[arg(long)]
    pub kind: String,

    /// Payload capacity in kg
    #[arg(long)]
    pub capacity_kg: Option<u64>,

    /// available, in_use, maintenance or inactive (default: available)
    #[arg(long)]
    pub status: Option<TrailerStatus>,
}

impl From<CreateTrailerArgs> for CreateTrailer {
    fn from(val: CreateTrailerArgs) -> Self {
        CreateTrailer {
            registration: val.registration,
            kind: val.kind,
            capacity_kg: val.capacity_kg,
            status: val.status,
        }
    }
}

#[derive(Args)]
pub struct UpdateTrailerArgs {
    pub id: u64,

    #[arg(long)]
    pub registration: Option<String>,

    #[arg(long)]
    pub kind: Option<String>,

    #[arg(long)]
    pub capacity_kg: Option<u64>,

    /// available, in_use, maintenance or inactive
    #[arg(long)]
    pub status: Option<TrailerStatus>,
}

impl From<UpdateTrailerArgs> for UpdateTrailer {
    fn from(val: UpdateTrailerArgs) -> Self {
        UpdateTrailer {
            id: val.id,
            registration: val.registration,
            kind: val.kind,
            capacity_kg: val.capacity_kg,
            status: val.status,
        }
    }
}

#[derive(Args)]
pub struct ListTrailersArgs {
    /// Only trailers in this status
    #[arg(long)]
    pub status: Option<TrailerStatus>,
}

impl From<ListTrailersArgs> for ListTrailers {
    fn from(val: ListTrailersArgs) -> Self {
        ListTrailers { status: val.status }
    }
}

#[derive(Subcommand)]
pub enum TrailerCommands {
    /// Register a new trailer
    #[command(alias = "add")]
    Create(CreateTrailerArgs),
    /// List trailers
    #[command(alias = "ls")]
    List(ListTrailersArgs),
    /// Show one trailer
    Show(IdArgs),
    /// Change a trailer's details or status
    Update(UpdateTrailerArgs),
    /// Delete a trailer that was never hitched to a trip
    #[command(alias = "rm")]
    Delete(DeleteArgs),
    /// List trailers free during a window
    Available(WindowArgs),
}

// ============================================================================
// Users and drivers
// ============================================================================

#[derive(Args)]
pub struct CreateUserArgs {
    /// Full name
    pub name: String,

    /// Email address, unique across users
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: Option<String>,

    /// admin or chauffeur
    #[arg(long, default_value = "chauffeur")]
    pub role: UserRole,
}

impl From<CreateUserArgs> for CreateUser {
    fn from(val: CreateUserArgs) -> Self {
        CreateUser {
            name: val.name,
            email: val.email,
            phone: val.phone,
            role: val.role,
        }
    }
}

#[derive(Args)]
pub struct ListUsersArgs {
    /// Only users with this role
    #[arg(long)]
    pub role: Option<UserRole>,
}

impl From<ListUsersArgs> for ListUsers {
    fn from(val: ListUsersArgs) -> Self {
        ListUsers { role: val.role }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a user account
    #[command(alias = "add")]
    Create(CreateUserArgs),
    /// List users
    #[command(alias = "ls")]
    List(ListUsersArgs),
    /// Show one user
    Show(IdArgs),
    /// Delete a user who never drove a trip
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Subcommand)]
pub enum DriverCommands {
    /// List every chauffeur
    #[command(alias = "ls")]
    List,
    /// List chauffeurs free during a window
    Available(WindowArgs),
}

// ============================================================================
// Trips
// ============================================================================

/// Schedule a trip
#[derive(Args)]
pub struct CreateTripArgs {
    #[arg(long)]
    pub vehicle_id: u64,

    #[arg(long)]
    pub trailer_id: Option<u64>,

    /// User ID of a chauffeur
    #[arg(long)]
    pub driver_id: u64,

    #[arg(long)]
    pub origin: String,

    #[arg(long)]
    pub destination: String,

    #[command(flatten)]
    pub window: WindowArgs,
}

impl From<CreateTripArgs> for CreateTrip {
    fn from(val: CreateTripArgs) -> Self {
        CreateTrip {
            vehicle_id: val.vehicle_id,
            trailer_id: val.trailer_id,
            driver_id: val.driver_id,
            origin: val.origin,
            destination: val.destination,
            start_at: val.window.start_at,
            end_at: val.window.end_at,
        }
    }
}

#[derive(Args)]
pub struct ListTripsArgs {
    /// planned, in_progress, completed or cancelled
    #[arg(long)]
    pub status: Option<TripStatus>,

    #[arg(long)]
    pub vehicle_id: Option<u64>,

    #[arg(long)]
    pub driver_id: Option<u64>,
}

impl From<ListTripsArgs> for ListTrips {
    fn from(val: ListTripsArgs) -> Self {
        ListTrips {
            status: val.status,
            vehicle_id: val.vehicle_id,
            driver_id: val.driver_id,
        }
    }
}

#[derive(Args)]
pub struct CompleteTripArgs {
    pub id: u64,

    /// Distance driven, added to the vehicle's mileage
    #[arg(long)]
    pub distance_km: Option<u64>,
}

impl From<CompleteTripArgs> for UpdateTripStatus {
    fn from(val: CompleteTripArgs) -> Self {
        UpdateTripStatus {
            id: val.id,
            status: TripStatus::Completed,
            distance_km: val.distance_km,
        }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// Schedule a trip, refusing any double booking
    #[command(alias = "schedule")]
    Create(CreateTripArgs),
    /// List trips by departure
    #[command(alias = "ls")]
    List(ListTripsArgs),
    /// Show one trip
    Show(IdArgs),
    /// Mark a planned trip as in progress
    Start(IdArgs),
    /// Mark a trip as completed
    #[command(alias = "done")]
    Complete(CompleteTripArgs),
    /// Cancel a trip, freeing its resources
    Cancel(IdArgs),
    /// Delete a trip record
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

// ============================================================================
// Upkeep
// ============================================================================

#[derive(Args)]
pub struct AddTireArgs {
    #[arg(long)]
    pub vehicle_id: u64,

    /// Wheel position, e.g. front-left
    #[arg(long)]
    pub position: String,

    /// Odometer reading when fitted
    #[arg(long)]
    pub installed_at_km: u64,

    /// Odometer reading at which the tire is due for inspection
    #[arg(long)]
    pub next_check_km: u64,
}

impl From<AddTireArgs> for AddTire {
    fn from(val: AddTireArgs) -> Self {
        AddTire {
            vehicle_id: val.vehicle_id,
            position: val.position,
            installed_at_km: val.installed_at_km,
            next_check_km: val.next_check_km,
        }
    }
}

#[derive(Args)]
pub struct VehicleRecordsArgs {
    /// Only records of this vehicle
    #[arg(long)]
    pub vehicle_id: Option<u64>,
}

impl From<VehicleRecordsArgs> for VehicleRecords {
    fn from(val: VehicleRecordsArgs) -> Self {
        VehicleRecords {
            vehicle_id: val.vehicle_id,
        }
    }
}

#[derive(Subcommand)]
pub enum TireCommands {
    /// Record a fitted tire
    Add(AddTireArgs),
    /// List tires
    #[command(alias = "ls")]
    List(VehicleRecordsArgs),
    /// Remove a tire record
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct RecordMaintenanceArgs {
    #[arg(long)]
    pub vehicle_id: u64,

    /// Kind of service, e.g. "oil change"
    #[arg(long)]
    pub kind: String,

    /// Odometer reading when performed
    #[arg(long)]
    pub performed_at_km: u64,

    /// Odometer reading at which the next service of this kind is due
    #[arg(long)]
    pub next_service_km: u64,

    #[arg(long)]
    pub notes: Option<String>,
}

impl From<RecordMaintenanceArgs> for RecordMaintenance {
    fn from(val: RecordMaintenanceArgs) -> Self {
        RecordMaintenance {
            vehicle_id: val.vehicle_id,
            kind: val.kind,
            performed_at_km: val.performed_at_km,
            next_service_km: val.next_service_km,
            notes: val.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum MaintenanceCommands {
    /// Record a performed service
    #[command(alias = "add")]
    Record(RecordMaintenanceArgs),
    /// List services by vehicle and mileage
    #[command(alias = "ls")]
    List(VehicleRecordsArgs),
}

// ============================================================================
// Alerts
// ============================================================================

#[derive(Args)]
pub struct ListNotificationsArgs {
    /// Only notifications addressed to this user
    #[arg(long)]
    pub user_id: Option<u64>,

    /// Include resolved notifications
    #[arg(long)]
    pub all: bool,
}

impl From<ListNotificationsArgs> for ListNotifications {
    fn from(val: ListNotificationsArgs) -> Self {
        ListNotifications {
            user_id: val.user_id,
            include_resolved: val.all,
        }
    }
}

#[derive(Subcommand)]
pub enum AlertCommands {
    /// Check tires and services against current mileage and notify admins
    Check {
        /// Only check tires
        #[arg(long, conflicts_with = "maintenance")]
        tires: bool,

        /// Only check services
        #[arg(long)]
        maintenance: bool,
    },
    /// List notifications
    #[command(alias = "ls")]
    List(ListNotificationsArgs),
    /// Mark a notification as handled
    Resolve(IdArgs),
}
