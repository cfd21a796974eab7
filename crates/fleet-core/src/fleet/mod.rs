//! High-level async API for the fleet.
//!
//! [`Fleet`] is the entry point every interface goes through. Each method
//! opens a [`Database`] connection on the blocking thread pool, so callers on
//! a tokio runtime never block on SQLite.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / MCP     │    │      Fleet      │    │    Database     │
//! │  (params, args) │───▶│ (async, *_ops)  │───▶│   (via db/)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configures the database path and alert thresholds
//! - [`availability_ops`]: which vehicles, trailers and drivers are free
//! - [`trip_ops`]: scheduling and the trip lifecycle
//! - [`alert_ops`]: mileage alerts and notifications
//! - [`vehicle_ops`], [`trailer_ops`], [`user_ops`], [`upkeep_ops`]: records
//!
//! # Examples
//!
//! ```rust,no_run
//! use fleet_core::{params::Availability, FleetBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fleet = FleetBuilder::new()
//!     .with_database_path(Some("/tmp/fleet.db"))
//!     .build()
//!     .await?;
//!
//! let free = fleet
//!     .available_vehicles(&Availability {
//!         start_at: Some("2024-01-15T08:00:00Z".to_string()),
//!         end_at: Some("2024-01-15T18:00:00Z".to_string()),
//!     })
//!     .await?;
//! println!("{free}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    alerts::AlertThresholds,
    db::Database,
    error::{FleetError, Result},
};

pub mod alert_ops;
pub mod availability_ops;
pub mod builder;
pub mod trailer_ops;
pub mod trip_ops;
pub mod upkeep_ops;
pub mod user_ops;
pub mod vehicle_ops;


pub use availability_ops::Available;
pub use builder::FleetBuilder;

/// Main interface for managing the fleet.
#[derive(Debug, Clone)]
pub struct Fleet {
    pub(crate) db_path: PathBuf,
    pub(crate) thresholds: AlertThresholds,
}

impl Fleet {
    pub(crate) fn new(db_path: PathBuf, thresholds: AlertThresholds) -> Self {
        Self {
            db_path,
            thresholds,
        }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Thresholds used by the alert checks.
    pub fn thresholds(&self) -> AlertThresholds {
        self.thresholds
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| FleetError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
