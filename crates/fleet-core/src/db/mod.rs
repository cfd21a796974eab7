//! Database operations and SQLite management for the fleet.
//!
//! This module provides low-level database operations. It handles SQLite
//! connections and schema setup, and exposes one query submodule per table
//! plus [`availability_queries`], which loads what the availability resolver
//! needs.

use std::{path::Path, time::Duration};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod availability_queries;
pub mod migrations;
pub mod notification_queries;
pub mod trailer_queries;
pub mod trip_queries;
pub mod upkeep_queries;
pub mod user_queries;
pub mod utils;
pub mod vehicle_queries;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
