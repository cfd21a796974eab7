//! Vehicle CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{get_enum, get_timestamp, get_u64, placeholders, to_sql};
use crate::{
    error::{DatabaseResultExt, FleetError, Result},
    models::{UpdateVehicleRequest, Vehicle, VehicleStatus},
};

const VEHICLE_COLUMNS: &str =
    "id, registration, brand, model, mileage_km, status, created_at, updated_at";
const INSERT_VEHICLE_SQL: &str = "INSERT INTO vehicles (registration, brand, model, mileage_km, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_VEHICLE_SQL: &str = "UPDATE vehicles SET registration = ?1, brand = ?2, model = ?3, mileage_km = ?4, status = ?5, updated_at = ?6 WHERE id = ?7";
const MILEAGE_SQL: &str = "SELECT mileage_km FROM vehicles WHERE id = ?1";
const SET_MILEAGE_SQL: &str = "UPDATE vehicles SET mileage_km = ?1, updated_at = ?2 WHERE id = ?3";
const COUNT_VEHICLE_TRIPS_SQL: &str = "SELECT COUNT(*) FROM trips WHERE vehicle_id = ?1";
const DELETE_VEHICLE_SQL: &str = "DELETE FROM vehicles WHERE id = ?1";

impl super::Database {
    pub(crate) fn vehicle_from_row(row: &Row) -> rusqlite::Result<Vehicle> {
        Ok(Vehicle {
            id: get_u64(row, 0)?,
            registration: row.get(1)?,
            brand: row.get(2)?,
            model: row.get(3)?,
            mileage_km: get_u64(row, 4)?,
            status: get_enum(row, 5)?,
            created_at: get_timestamp(row, 6)?,
            updated_at: get_timestamp(row, 7)?,
        })
    }

    /// Registers a new vehicle.
    pub fn create_vehicle(
        &mut self,
        registration: &str,
        brand: &str,
        model: &str,
        mileage_km: u64,
        status: VehicleStatus,
    ) -> Result<Vehicle> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_VEHICLE_SQL,
                params![
                    registration,
                    brand,
                    model,
                    to_sql("mileage_km", mileage_km)?,
                    status.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .unique_context("registration", "Failed to insert vehicle")?;

        Ok(Vehicle {
            id: self.connection.last_insert_rowid() as u64,
            registration: registration.into(),
            brand: brand.into(),
            model: model.into(),
            mileage_km,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a vehicle by its ID.
    pub fn get_vehicle(&self, id: u64) -> Result<Option<Vehicle>> {
        self.connection
            .query_row(
                &format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::vehicle_from_row,
            )
            .optional()
            .db_context("Failed to query vehicle")
    }

    /// Lists vehicles, optionally restricted to the given statuses, in id
    /// order.
    pub fn list_vehicles(&self, statuses: &[VehicleStatus]) -> Result<Vec<Vehicle>> {
        let mut query = format!("SELECT {VEHICLE_COLUMNS} FROM vehicles");
        if !statuses.is_empty() {
            query.push_str(&format!(" WHERE status IN ({})", placeholders(statuses.len())));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let status_strs: Vec<&str> = statuses.iter().map(VehicleStatus::as_str).collect();
        let vehicles = stmt
            .query_map(rusqlite::params_from_iter(status_strs), Self::vehicle_from_row)
            .db_context("Failed to query vehicles")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch vehicles")?;

        Ok(vehicles)
    }

    /// Applies a partial update. Returns `None` if the vehicle doesn't exist.
    pub fn update_vehicle(
        &mut self,
        id: u64,
        request: UpdateVehicleRequest,
    ) -> Result<Option<Vehicle>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                &format!("SELECT {VEHICLE_COLUMNS} FROM vehicles WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::vehicle_from_row,
            )
            .optional()
            .db_context("Failed to query vehicle")?;

        let Some(current) = current else {
            return Ok(None);
        };

        let now = Timestamp::now();
        let updated = Vehicle {
            id: current.id,
            registration: request.registration.unwrap_or(current.registration),
            brand: request.brand.unwrap_or(current.brand),
            model: request.model.unwrap_or(current.model),
            mileage_km: request.mileage_km.unwrap_or(current.mileage_km),
            status: request.status.unwrap_or(current.status),
            created_at: current.created_at,
            updated_at: now,
        };

        tx.execute(
            UPDATE_VEHICLE_SQL,
            params![
                &updated.registration,
                &updated.brand,
                &updated.model,
                to_sql("mileage_km", updated.mileage_km)?,
                updated.status.as_str(),
                now.to_string(),
                to_sql("id", id)?
            ],
        )
        .unique_context("registration", "Failed to update vehicle")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(updated))
    }

    /// Adds driven distance to a vehicle's odometer.
    ///
    /// Fails with `InvalidInput` when the new reading would pass `i64::MAX`.
    pub(crate) fn add_mileage(
        tx: &rusqlite::Transaction<'_>,
        vehicle_id: u64,
        distance_km: u64,
    ) -> Result<()> {
        let key = to_sql("vehicle_id", vehicle_id)?;
        let current: i64 = tx
            .query_row(MILEAGE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query vehicle mileage")?
            .ok_or_else(|| FleetError::not_found("Vehicle", vehicle_id))?;

        let total = current
            .checked_add(to_sql("distanceKm", distance_km)?)
            .ok_or_else(|| {
                FleetError::invalid_input("distanceKm").with_reason(format!(
                    "adding {distance_km} km to vehicle {vehicle_id} overflows its mileage"
                ))
            })?;

        tx.execute(SET_MILEAGE_SQL, params![total, Timestamp::now().to_string(), key])
            .db_context("Failed to update vehicle mileage")?;
        Ok(())
    }

    /// Permanently deletes a vehicle. Vehicles that ever ran a trip are kept
    /// for history; retire them with the `inactive` status instead.
    pub fn delete_vehicle(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let trips: i64 = tx
            .query_row(COUNT_VEHICLE_TRIPS_SQL, params![to_sql("id", id)?], |row| row.get(0))
            .db_context("Failed to count vehicle trips")?;
        if trips > 0 {
            return Err(FleetError::invalid_input("id").with_reason(format!(
                "vehicle {id} has {trips} trip(s); set its status to inactive instead"
            )));
        }

        let deleted = tx
            .execute(DELETE_VEHICLE_SQL, params![to_sql("id", id)?])
            .db_context("Failed to delete vehicle")?;
        if deleted == 0 {
            return Err(FleetError::not_found("Vehicle", id));
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
