//! Tire and maintenance operations for the Fleet.

use super::Fleet;
use crate::{
    display::{MaintenanceLog, Tires},
    error::Result,
    models::{Maintenance, Tire},
    params::{AddTire, Id, RecordMaintenance, VehicleRecords},
};

impl Fleet {
    /// Fits a tire on a vehicle.
    pub async fn add_tire(&self, params: &AddTire) -> Result<Tire> {
        params.validate()?;
        let params = params.clone();

        self.with_db(move |db| {
            db.add_tire(
                params.vehicle_id,
                params.position.trim(),
                params.installed_at_km,
                params.next_check_km,
            )
        })
        .await
    }

    /// Lists tires of one vehicle, or of the whole fleet.
    pub async fn list_tires(&self, params: &VehicleRecords) -> Result<Tires> {
        let vehicle_id = params.vehicle_id;
        let tires = self.with_db(move |db| db.list_tires(vehicle_id)).await?;
        Ok(Tires(tires))
    }

    /// Removes a tire record.
    pub async fn delete_tire(&self, params: &Id) -> Result<()> {
        let id = params.id;
        self.with_db(move |db| db.delete_tire(id)).await
    }

    /// Records a service performed on a vehicle.
    pub async fn record_maintenance(&self, params: &RecordMaintenance) -> Result<Maintenance> {
        params.validate()?;
        let params = params.clone();

        self.with_db(move |db| {
            db.record_maintenance(
                params.vehicle_id,
                params.kind.trim(),
                params.performed_at_km,
                params.next_service_km,
                params.notes.as_deref(),
            )
        })
        .await
    }

    /// Lists maintenance records of one vehicle, or of the whole fleet.
    pub async fn list_maintenance(&self, params: &VehicleRecords) -> Result<MaintenanceLog> {
        let vehicle_id = params.vehicle_id;
        let records = self
            .with_db(move |db| db.list_maintenance(vehicle_id))
            .await?;
        Ok(MaintenanceLog(records))
    }
}
