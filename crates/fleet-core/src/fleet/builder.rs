//! Builder for creating and configuring Fleet instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Fleet;
use crate::{
    alerts::AlertThresholds,
    db::Database,
    error::{FleetError, Result},
};

/// Builder for creating and configuring Fleet instances.
#[derive(Debug, Clone, Default)]
pub struct FleetBuilder {
    database_path: Option<PathBuf>,
    thresholds: AlertThresholds,
}

impl FleetBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/fleet/fleet.db` or `~/.local/share/fleet/fleet.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the distances under which tire and maintenance alerts fire.
    pub fn with_alert_thresholds(mut self, thresholds: AlertThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Builds the configured fleet instance, creating the database file and
    /// schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::FileSystem` if the database directory cannot be
    /// created, `FleetError::XdgDirectory` if no default location exists and
    /// `FleetError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Fleet> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FleetError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), FleetError>(())
        })
        .await
        .map_err(|e| FleetError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        debug!("Using database {}", db_path.display());
        Ok(Fleet::new(db_path, self.thresholds))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("fleet")
            .place_data_file("fleet.db")
            .map_err(|e| FleetError::XdgDirectory(e.to_string()))
    }
}
