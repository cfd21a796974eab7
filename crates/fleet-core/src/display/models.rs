//! Display implementations for domain models.
//!
//! Every model renders as a markdown block: a heading with the identifying
//! fields, then a metadata list. Enums render as their storage string.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    AlertSeverity, AlertType, EntityClass, Maintenance, Notification, Tire, Trailer,
    TrailerStatus, Trip, TripStatus, User, UserRole, Vehicle, VehicleStatus,
};

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(
    VehicleStatus,
    TrailerStatus,
    UserRole,
    TripStatus,
    AlertType,
    AlertSeverity,
    EntityClass,
);

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.registration, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Model**: {} {}", self.brand, self.model)?;
        writeln!(f, "- **Mileage**: {} km", self.mileage_km)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for Trailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.registration, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Kind**: {}", self.kind)?;
        if let Some(capacity) = self.capacity_kg {
            writeln!(f, "- **Capacity**: {capacity} kg")?;
        }
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Role**: {}", self.role)?;
        writeln!(f, "- **Email**: {}", self.email)?;
        if let Some(phone) = &self.phone {
            writeln!(f, "- **Phone**: {phone}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Trip {}: {} → {} ({})",
            self.id, self.origin, self.destination, self.status
        )?;
        writeln!(f)?;
        writeln!(f, "- **Vehicle**: {}", self.vehicle_id)?;
        if let Some(trailer) = self.trailer_id {
            writeln!(f, "- **Trailer**: {trailer}")?;
        }
        writeln!(f, "- **Driver**: {}", self.driver_id)?;
        writeln!(f, "- **Departure**: {}", LocalDateTime(&self.start_at))?;
        match &self.end_at {
            Some(end) => writeln!(f, "- **Arrival**: {}", LocalDateTime(end))?,
            None => writeln!(f, "- **Arrival**: not set")?,
        }
        if let Some(distance) = self.distance_km {
            writeln!(f, "- **Distance**: {distance} km")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Tire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Tire {} on vehicle {} ({}): fitted at {} km, check at {} km",
            self.id, self.vehicle_id, self.position, self.installed_at_km, self.next_check_km
        )
    }
}

impl fmt::Display for Maintenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} on vehicle {} at {} km, next at {} km",
            self.kind, self.vehicle_id, self.performed_at_km, self.next_service_km
        )?;
        match &self.notes {
            Some(notes) => writeln!(f, " ({notes})"),
            None => writeln!(f),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} {} (vehicle {})",
            self.id,
            self.severity.with_icon(),
            self.alert_type,
            self.vehicle_id
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;
        writeln!(f, "- **To**: user {}", self.user_id)?;
        writeln!(f, "- **Raised**: {}", LocalDateTime(&self.created_at))?;
        if let Some(resolved_at) = &self.resolved_at {
            writeln!(f, "- **Resolved**: {}", LocalDateTime(resolved_at))?;
        }
        writeln!(f)
    }
}
