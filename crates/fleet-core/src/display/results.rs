//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    alerts::AlertReport,
    models::{Maintenance, Tire, Trailer, Trip, User, Vehicle},
};

/// A resource that can be named in an operation result.
pub trait Resource: fmt::Display {
    /// Lower-case kind, e.g. "vehicle".
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Short human label used in deletion messages.
    fn label(&self) -> String;
}

impl Resource for Vehicle {
    const KIND: &'static str = "vehicle";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.registration.clone()
    }
}

impl Resource for Trailer {
    const KIND: &'static str = "trailer";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.registration.clone()
    }
}

impl Resource for User {
    const KIND: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Resource for Trip {
    const KIND: &'static str = "trip";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

impl Resource for Tire {
    const KIND: &'static str = "tire";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.position.clone()
    }
}

impl Resource for Maintenance {
    const KIND: &'static str = "maintenance record";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.kind.clone()
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use fleet_core::{
///     display::CreateResult,
///     models::{Trailer, TrailerStatus},
/// };
/// use jiff::Timestamp;
///
/// let trailer = Trailer {
///     id: 4,
///     registration: "TR-004".to_string(),
///     kind: "reefer".to_string(),
///     capacity_kg: Some(24_000),
///     status: TrailerStatus::Available,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(trailer).to_string();
/// assert!(output.starts_with("Created trailer with ID: 4"));
/// assert!(output.contains("24000 kg"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}

impl fmt::Display for AlertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.candidates.is_empty() {
            return writeln!(f, "No vehicle is due for a tire check or a service.");
        }

        writeln!(
            f,
            "{} alert(s) due, {} new notification(s) sent.",
            self.candidates.len(),
            self.created
        )?;
        writeln!(f)?;
        for candidate in &self.candidates {
            writeln!(
                f,
                "- {} {}: {}",
                candidate.severity.with_icon(),
                candidate.alert_type,
                candidate.message
            )?;
        }
        Ok(())
    }
}
