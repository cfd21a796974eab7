//! Availability queries for the Fleet.

use std::fmt;

use super::Fleet;
use crate::{
    display::{Trailers, Users, Vehicles},
    error::Result,
    models::EntityClass,
    params::Availability,
};

/// Free resources of one class.
#[derive(Debug, Clone)]
pub enum Available {
    Vehicles(Vehicles),
    Trailers(Trailers),
    Drivers(Users),
}

impl Available {
    /// Number of free resources.
    pub fn len(&self) -> usize {
        match self {
            Available::Vehicles(v) => v.len(),
            Available::Trailers(t) => t.len(),
            Available::Drivers(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Available {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Available::Vehicles(v) => write!(f, "{v}"),
            Available::Trailers(t) => write!(f, "{t}"),
            Available::Drivers(d) if d.is_empty() => writeln!(f, "No drivers found."),
            Available::Drivers(d) => write!(f, "{d}"),
        }
    }
}

impl Fleet {
    /// Vehicles that are `active` or `in_use` and not bound to a `planned`
    /// or `in_progress` trip overlapping the window.
    ///
    /// # Errors
    ///
    /// * `FleetError::InvalidInput` - When startAt is missing ("startAt est
    ///   obligatoire") or a bound cannot be parsed
    /// * `FleetError::Database` - When the store cannot be read
    pub async fn available_vehicles(&self, params: &Availability) -> Result<Vehicles> {
        let window = params.window()?;
        let vehicles = self
            .with_db(move |db| db.available_vehicles(&window))
            .await?;
        Ok(Vehicles(vehicles))
    }

    /// Trailers that are `available` or `in_use` and not bound to an
    /// occupying trip overlapping the window.
    pub async fn available_trailers(&self, params: &Availability) -> Result<Trailers> {
        let window = params.window()?;
        let trailers = self
            .with_db(move |db| db.available_trailers(&window))
            .await?;
        Ok(Trailers(trailers))
    }

    /// Chauffeurs not driving an occupying trip overlapping the window.
    pub async fn available_drivers(&self, params: &Availability) -> Result<Users> {
        let window = params.window()?;
        let drivers = self.with_db(move |db| db.available_drivers(&window)).await?;
        Ok(Users(drivers))
    }

    /// Dispatches to the query for `class`.
    pub async fn find_available(
        &self,
        class: EntityClass,
        params: &Availability,
    ) -> Result<Available> {
        Ok(match class {
            EntityClass::Vehicle => Available::Vehicles(self.available_vehicles(params).await?),
            EntityClass::Trailer => Available::Trailers(self.available_trailers(params).await?),
            EntityClass::Driver => Available::Drivers(self.available_drivers(params).await?),
        })
    }
}
