//! Vehicle operations for the Fleet.

use super::Fleet;
use crate::{
    display::Vehicles,
    error::Result,
    models::Vehicle,
    params::{CreateVehicle, Id, ListVehicles, UpdateVehicle},
};

impl Fleet {
    /// Registers a vehicle. The registration must be unique.
    pub async fn create_vehicle(&self, params: &CreateVehicle) -> Result<Vehicle> {
        params.validate()?;
        let params = params.clone();

        self.with_db(move |db| {
            db.create_vehicle(
                params.registration.trim(),
                params.brand.trim(),
                params.model.trim(),
                params.mileage_km,
                params.status.unwrap_or_default(),
            )
        })
        .await
    }

    /// Retrieves a vehicle by its ID.
    pub async fn get_vehicle(&self, params: &Id) -> Result<Option<Vehicle>> {
        let id = params.id;
        self.with_db(move |db| db.get_vehicle(id)).await
    }

    /// Lists vehicles, optionally restricted to one status.
    pub async fn list_vehicles(&self, params: &ListVehicles) -> Result<Vehicles> {
        let statuses: Vec<_> = params.status.into_iter().collect();
        let vehicles = self.with_db(move |db| db.list_vehicles(&statuses)).await?;
        Ok(Vehicles(vehicles))
    }

    /// Applies a partial update. Returns `None` if the vehicle doesn't exist.
    pub async fn update_vehicle(&self, params: &UpdateVehicle) -> Result<Option<Vehicle>> {
        let request = params.validate()?;
        let id = params.id;
        self.with_db(move |db| db.update_vehicle(id, request)).await
    }

    /// Deletes a vehicle that never ran a trip, returning it. Returns `None`
    /// if the vehicle doesn't exist.
    pub async fn delete_vehicle(&self, params: &Id) -> Result<Option<Vehicle>> {
        let id = params.id;
        self.with_db(move |db| {
            let Some(vehicle) = db.get_vehicle(id)? else {
                return Ok(None);
            };
            db.delete_vehicle(id)?;
            Ok(Some(vehicle))
        })
        .await
    }
}
