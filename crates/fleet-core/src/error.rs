//! Error types for the fleet library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{EntityClass, TripStatus};

/// Comprehensive error type for all fleet operations.
#[derive(Error, Debug)]
pub enum FleetError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A referenced record does not exist
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Trip status change not allowed by the lifecycle
    #[error("Trip {id} cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        id: u64,
        from: TripStatus,
        to: TripStatus,
    },
    /// The entity is already bound to an overlapping trip
    #[error("{class} {id} is already assigned to trip {trip_id} in that window")]
    Conflict {
        class: EntityClass,
        id: u64,
        trip_id: u64,
    },
    /// The entity exists but its lifecycle state forbids assignment
    #[error("{class} {id} cannot be assigned: {reason}")]
    Unavailable {
        class: EntityClass,
        id: u64,
        reason: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> FleetError {
        FleetError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> FleetError {
        FleetError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl FleetError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for [`FleetError::NotFound`].
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Whether the error was caused by the caller (bad input, missing record,
    /// scheduling conflict) rather than by storage or configuration.
    ///
    /// Interfaces use this to pick between a "bad request" style answer and a
    /// generic failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::InvalidInput { .. }
                | Self::InvalidTransition { .. }
                | Self::Conflict { .. }
                | Self::Unavailable { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;

    /// Map database errors, turning UNIQUE violations into an
    /// [`FleetError::InvalidInput`] on `field`.
    fn unique_context(self, field: &str, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| FleetError::database(message).with_source(e))
    }

    fn unique_context(self, field: &str, message: &str) -> Result<T> {
        self.map_err(|e| match e {
            rusqlite::Error::SqliteFailure(ref err, _)
                if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
            {
                FleetError::invalid_input(field).with_reason("value is already in use")
            }
            other => FleetError::database(message).with_source(other),
        })
    }
}

/// Result type alias for fleet operations
pub type Result<T> = std::result::Result<T, FleetError>;
