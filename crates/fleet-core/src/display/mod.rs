//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results so
//! the CLI and the MCP server print the same markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Collections &   │    │   Formatted     │
//! │ (Vehicle, Trip) │───▶│ Result Types    │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: `Vehicles`, `Trailers`, `Users`, `Trips`, `Tires`,
//!   `MaintenanceLog`, `Notifications`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult` and the
//!   alert check report
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime`
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use fleet_core::{
//!     display::{CreateResult, Vehicles},
//!     models::{Vehicle, VehicleStatus},
//! };
//! use jiff::Timestamp;
//!
//! let vehicle = Vehicle {
//!     id: 1,
//!     registration: "AB-123-CD".to_string(),
//!     brand: "Renault".to_string(),
//!     model: "T480".to_string(),
//!     mileage_km: 120_000,
//!     status: VehicleStatus::Active,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! let output = CreateResult::new(vehicle.clone()).to_string();
//! assert!(output.contains("Created vehicle with ID: 1"));
//!
//! assert_eq!(Vehicles(vec![]).to_string(), "No vehicles found.\n");
//! assert!(Vehicles(vec![vehicle]).to_string().contains("AB-123-CD"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{MaintenanceLog, Notifications, Tires, Trailers, Trips, Users, Vehicles};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
