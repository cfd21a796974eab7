//! Tire and maintenance records.

use jiff::Timestamp;
use rusqlite::{params, Row};

use super::utils::{get_timestamp, get_u64, to_sql};
use crate::{
    error::{DatabaseResultExt, FleetError, Result},
    models::{Maintenance, Tire},
};

const INSERT_TIRE_SQL: &str = "INSERT INTO tires (vehicle_id, position, installed_at_km, next_check_km, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const TIRE_COLUMNS: &str = "id, vehicle_id, position, installed_at_km, next_check_km, created_at";
const DELETE_TIRE_SQL: &str = "DELETE FROM tires WHERE id = ?1";
const INSERT_MAINTENANCE_SQL: &str = "INSERT INTO maintenances (vehicle_id, kind, performed_at_km, next_service_km, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const MAINTENANCE_COLUMNS: &str =
    "id, vehicle_id, kind, performed_at_km, next_service_km, notes, created_at";
const VEHICLE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = ?1)";

impl super::Database {
    fn tire_from_row(row: &Row) -> rusqlite::Result<Tire> {
        Ok(Tire {
            id: get_u64(row, 0)?,
            vehicle_id: get_u64(row, 1)?,
            position: row.get(2)?,
            installed_at_km: get_u64(row, 3)?,
            next_check_km: get_u64(row, 4)?,
            created_at: get_timestamp(row, 5)?,
        })
    }

    fn maintenance_from_row(row: &Row) -> rusqlite::Result<Maintenance> {
        Ok(Maintenance {
            id: get_u64(row, 0)?,
            vehicle_id: get_u64(row, 1)?,
            kind: row.get(2)?,
            performed_at_km: get_u64(row, 3)?,
            next_service_km: get_u64(row, 4)?,
            notes: row.get(5)?,
            created_at: get_timestamp(row, 6)?,
        })
    }

    fn ensure_vehicle(&self, vehicle_id: u64) -> Result<()> {
        let exists: bool = self
            .connection
            .query_row(
                VEHICLE_EXISTS_SQL,
                params![to_sql("vehicle_id", vehicle_id)?],
                |row| row.get(0),
            )
            .db_context("Failed to query vehicle")?;
        if exists {
            Ok(())
        } else {
            Err(FleetError::not_found("Vehicle", vehicle_id))
        }
    }

    /// Fits a tire on a vehicle.
    pub fn add_tire(
        &mut self,
        vehicle_id: u64,
        position: &str,
        installed_at_km: u64,
        next_check_km: u64,
    ) -> Result<Tire> {
        self.ensure_vehicle(vehicle_id)?;

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_TIRE_SQL,
                params![
                    to_sql("vehicle_id", vehicle_id)?,
                    position,
                    to_sql("installed_at_km", installed_at_km)?,
                    to_sql("next_check_km", next_check_km)?,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert tire")?;

        Ok(Tire {
            id: self.connection.last_insert_rowid() as u64,
            vehicle_id,
            position: position.into(),
            installed_at_km,
            next_check_km,
            created_at: now,
        })
    }

    /// Lists tires, for one vehicle or for the whole fleet.
    pub fn list_tires(&self, vehicle_id: Option<u64>) -> Result<Vec<Tire>> {
        let mut query = format!("SELECT {TIRE_COLUMNS} FROM tires");
        if vehicle_id.is_some() {
            query.push_str(" WHERE vehicle_id = ?1");
        }
        query.push_str(" ORDER BY vehicle_id, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let ids: Vec<i64> = vehicle_id
            .iter()
            .map(|&id| to_sql("vehicle_id", id))
            .collect::<Result<_>>()?;
        let tires = stmt
            .query_map(rusqlite::params_from_iter(ids), Self::tire_from_row)
            .db_context("Failed to query tires")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tires")?;

        Ok(tires)
    }

    /// Removes a tire record.
    pub fn delete_tire(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_TIRE_SQL, params![to_sql("id", id)?])
            .db_context("Failed to delete tire")?;
        if deleted == 0 {
            return Err(FleetError::not_found("Tire", id));
        }
        Ok(())
    }

    /// Records a service performed on a vehicle.
    pub fn record_maintenance(
        &mut self,
        vehicle_id: u64,
        kind: &str,
        performed_at_km: u64,
        next_service_km: u64,
        notes: Option<&str>,
    ) -> Result<Maintenance> {
        self.ensure_vehicle(vehicle_id)?;

        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_MAINTENANCE_SQL,
                params![
                    to_sql("vehicle_id", vehicle_id)?,
                    kind,
                    to_sql("performed_at_km", performed_at_km)?,
                    to_sql("next_service_km", next_service_km)?,
                    notes,
                    now.to_string()
                ],
            )
            .db_context("Failed to insert maintenance")?;

        Ok(Maintenance {
            id: self.connection.last_insert_rowid() as u64,
            vehicle_id,
            kind: kind.into(),
            performed_at_km,
            next_service_km,
            notes: notes.map(String::from),
            created_at: now,
        })
    }

    /// Lists maintenance records, for one vehicle or for the whole fleet,
    /// oldest first.
    pub fn list_maintenance(&self, vehicle_id: Option<u64>) -> Result<Vec<Maintenance>> {
        let mut query = format!("SELECT {MAINTENANCE_COLUMNS} FROM maintenances");
        if vehicle_id.is_some() {
            query.push_str(" WHERE vehicle_id = ?1");
        }
        query.push_str(" ORDER BY vehicle_id, performed_at_km, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let ids: Vec<i64> = vehicle_id
            .iter()
            .map(|&id| to_sql("vehicle_id", id))
            .collect::<Result<_>>()?;
        let records = stmt
            .query_map(rusqlite::params_from_iter(ids), Self::maintenance_from_row)
            .db_context("Failed to query maintenance")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch maintenance")?;

        Ok(records)
    }
}
