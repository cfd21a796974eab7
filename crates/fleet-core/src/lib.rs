//! Core library for the fleet back office.
//!
//! This crate holds the business logic for a road-freight fleet: vehicles,
//! trailers and drivers, the trips that bind them over a time window, and the
//! tire and maintenance records that feed mileage alerts.
//!
//! # Layers
//!
//! - **Pure logic**: [`availability`] decides which resources are free for a
//!   window, [`alerts`] classifies distances left before a due mileage, and
//!   [`models::TripStatus`] carries the trip state machine.
//! - **Persistence** ([`db`]): SQLite via rusqlite. Trip creation checks for
//!   overlaps and inserts inside one `BEGIN IMMEDIATE` transaction; alert
//!   de-duplication is enforced by a partial unique index.
//! - **Facade** ([`Fleet`]): async methods taking [`params`] structs, shared
//!   by the CLI and the MCP server.
//! - **Display** ([`display`]): markdown `Display` for models, collections and
//!   operation results.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fleet_core::{
//!     models::UserRole,
//!     params::{Availability, CreateTrip, CreateUser, CreateVehicle},
//!     FleetBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fleet = FleetBuilder::new()
//!     .with_database_path(Some("fleet.db"))
//!     .build()
//!     .await?;
//!
//! let truck = fleet
//!     .create_vehicle(&CreateVehicle {
//!         registration: "AB-123-CD".to_string(),
//!         brand: "Renault".to_string(),
//!         model: "T480".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! let driver = fleet
//!     .create_user(&CreateUser {
//!         name: "Ana Lopes".to_string(),
//!         email: "ana@example.com".to_string(),
//!         phone: None,
//!         role: UserRole::Chauffeur,
//!     })
//!     .await?;
//!
//! fleet
//!     .schedule_trip(&CreateTrip {
//!         vehicle_id: truck.id,
//!         trailer_id: None,
//!         driver_id: driver.id,
//!         origin: "Lyon".to_string(),
//!         destination: "Marseille".to_string(),
//!         start_at: Some("2024-01-15T08:00:00Z".to_string()),
//!         end_at: Some("2024-01-15T18:00:00Z".to_string()),
//!     })
//!     .await?;
//!
//! let free = fleet
//!     .available_vehicles(&Availability {
//!         start_at: Some("2024-01-15T10:00:00Z".to_string()),
//!         end_at: Some("2024-01-15T12:00:00Z".to_string()),
//!     })
//!     .await?;
//! assert!(free.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod alerts;
pub mod availability;
pub mod db;
pub mod display;
pub mod error;
pub mod fleet;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use alerts::{AlertReport, AlertThresholds};
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, Notifications, OperationStatus, Trailers, Trips,
    UpdateResult, Users, Vehicles,
};
pub use error::{FleetError, Result};
pub use fleet::{Available, Fleet, FleetBuilder};
pub use models::{
    EntityClass, Interval, Notification, Trailer, TrailerStatus, Trip, TripStatus, User,
    UserRole, Vehicle, VehicleStatus,
};
pub use params::{
    Availability, CreateTrailer, CreateTrip, CreateUser, CreateVehicle, Id, ListTrips,
    UpdateTripStatus,
};
