//! Trip scheduling and lifecycle queries.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};

use super::{
    availability_queries::occupying_trips,
    utils::{
        get_enum, get_millis, get_opt_millis, get_opt_u64, get_timestamp, get_u64, to_sql,
    },
};
use crate::{
    availability::first_conflict,
    error::{DatabaseResultExt, FleetError, Result},
    models::{
        EntityClass, NewTrip, TrailerStatus, Trip, TripFilter, TripStatus, UserRole, VehicleStatus,
    },
};

const TRIP_COLUMNS: &str = "id, vehicle_id, trailer_id, driver_id, origin, destination, start_at, end_at, status, distance_km, created_at, updated_at";
const INSERT_TRIP_SQL: &str = "INSERT INTO trips (vehicle_id, trailer_id, driver_id, origin, destination, start_at, end_at, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const TRANSITION_TRIP_SQL: &str = "UPDATE trips SET status = ?1, distance_km = COALESCE(?2, distance_km), updated_at = ?3 WHERE id = ?4 AND status = ?5";
const VEHICLE_STATUS_SQL: &str = "SELECT status FROM vehicles WHERE id = ?1";
const TRAILER_STATUS_SQL: &str = "SELECT status FROM trailers WHERE id = ?1";
const USER_ROLE_SQL: &str = "SELECT role FROM users WHERE id = ?1";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

impl super::Database {
    pub(crate) fn trip_from_row(row: &Row) -> rusqlite::Result<Trip> {
        Ok(Trip {
            id: get_u64(row, 0)?,
            vehicle_id: get_u64(row, 1)?,
            trailer_id: get_opt_u64(row, 2)?,
            driver_id: get_u64(row, 3)?,
            origin: row.get(4)?,
            destination: row.get(5)?,
            start_at: get_millis(row, 6)?,
            end_at: get_opt_millis(row, 7)?,
            status: get_enum(row, 8)?,
            distance_km: get_opt_u64(row, 9)?,
            created_at: get_timestamp(row, 10)?,
            updated_at: get_timestamp(row, 11)?,
        })
    }

    /// Schedules a trip.
    ///
    /// The eligibility and overlap checks and the insert share one
    /// `BEGIN IMMEDIATE` transaction: a second writer waits on the lock and
    /// then sees this trip.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the vehicle, trailer or driver doesn't exist
    /// - `Unavailable` if one of them is in a state that forbids assignment
    /// - `InvalidInput` if the driver is not a chauffeur
    /// - `Conflict` if one of them is bound to an overlapping occupying trip
    pub fn create_trip(&mut self, trip: NewTrip) -> Result<Trip> {
        let window = trip.interval();
        let vehicle_key = to_sql("vehicle_id", trip.vehicle_id)?;
        let trailer_key = trip
            .trailer_id
            .map(|id| to_sql("trailer_id", id))
            .transpose()?;
        let driver_key = to_sql("driver_id", trip.driver_id)?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let vehicle_status: VehicleStatus = tx
            .query_row(VEHICLE_STATUS_SQL, params![vehicle_key], |row| get_enum(row, 0))
            .optional()
            .db_context("Failed to query vehicle")?
            .ok_or_else(|| FleetError::not_found("Vehicle", trip.vehicle_id))?;
        if !vehicle_status.is_eligible() {
            return Err(FleetError::Unavailable {
                class: EntityClass::Vehicle,
                id: trip.vehicle_id,
                reason: format!("status is {}", vehicle_status.as_str()),
            });
        }

        if let Some(trailer_id) = trip.trailer_id {
            let trailer_status: TrailerStatus = tx
                .query_row(TRAILER_STATUS_SQL, params![trailer_key], |row| get_enum(row, 0))
                .optional()
                .db_context("Failed to query trailer")?
                .ok_or_else(|| FleetError::not_found("Trailer", trailer_id))?;
            if !trailer_status.is_eligible() {
                return Err(FleetError::Unavailable {
                    class: EntityClass::Trailer,
                    id: trailer_id,
                    reason: format!("status is {}", trailer_status.as_str()),
                });
            }
        }

        let role: UserRole = tx
            .query_row(USER_ROLE_SQL, params![driver_key], |row| get_enum(row, 0))
            .optional()
            .db_context("Failed to query driver")?
            .ok_or_else(|| FleetError::not_found("User", trip.driver_id))?;
        if role != UserRole::Chauffeur {
            return Err(FleetError::invalid_input("driverId")
                .with_reason(format!("user {} is not a chauffeur", trip.driver_id)));
        }

        let occupying = occupying_trips(&tx, &window)?;
        let bound = [
            (EntityClass::Vehicle, Some(trip.vehicle_id)),
            (EntityClass::Trailer, trip.trailer_id),
            (EntityClass::Driver, Some(trip.driver_id)),
        ];
        for (class, id) in bound {
            let Some(id) = id else { continue };
            if let Some(trip_id) = first_conflict(&occupying, class, id, &window) {
                debug!("{} {id} conflicts with trip {trip_id}", class.as_str());
                return Err(FleetError::Conflict { class, id, trip_id });
            }
        }

        let now = Timestamp::now();
        let now_str = now.to_string();
        tx.execute(
            INSERT_TRIP_SQL,
            params![
                vehicle_key,
                trailer_key,
                driver_key,
                &trip.origin,
                &trip.destination,
                trip.start_at.as_millisecond(),
                trip.end_at.map(|t| t.as_millisecond()),
                TripStatus::Planned.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert trip")?;
        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Scheduled trip {id} ({} -> {})", trip.origin, trip.destination);

        Ok(Trip {
            id,
            vehicle_id: trip.vehicle_id,
            trailer_id: trip.trailer_id,
            driver_id: trip.driver_id,
            origin: trip.origin,
            destination: trip.destination,
            start_at: trip.start_at,
            end_at: trip.end_at,
            status: TripStatus::Planned,
            distance_km: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: u64) -> Result<Option<Trip>> {
        self.connection
            .query_row(
                &format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::trip_from_row,
            )
            .optional()
            .db_context("Failed to query trip")
    }

    /// Lists trips matching `filter`, earliest departure first.
    pub fn list_trips(&self, filter: &TripFilter) -> Result<Vec<Trip>> {
        let mut conditions = Vec::new();
        let mut values: Vec<rusqlite::types::Value> = Vec::new();

        if let Some(status) = filter.status {
            conditions.push("status = ?");
            values.push(status.as_str().to_string().into());
        }
        if let Some(vehicle_id) = filter.vehicle_id {
            conditions.push("vehicle_id = ?");
            values.push(to_sql("vehicle_id", vehicle_id)?.into());
        }
        if let Some(driver_id) = filter.driver_id {
            conditions.push("driver_id = ?");
            values.push(to_sql("driver_id", driver_id)?.into());
        }

        let mut query = format!("SELECT {TRIP_COLUMNS} FROM trips");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY start_at, id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let trips = stmt
            .query_map(rusqlite::params_from_iter(values), Self::trip_from_row)
            .db_context("Failed to query trips")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trips")?;

        Ok(trips)
    }

    /// Moves a trip to `next`, following [`TripStatus::can_transition_to`].
    ///
    /// The status write is a compare-and-set on the status read in the same
    /// transaction. Completing with `distance_km` also adds the distance to
    /// the vehicle's mileage.
    pub fn transition_trip(
        &mut self,
        id: u64,
        next: TripStatus,
        distance_km: Option<u64>,
    ) -> Result<Trip> {
        if distance_km.is_some() && next != TripStatus::Completed {
            return Err(FleetError::invalid_input("distanceKm")
                .with_reason("a distance can only be recorded when completing a trip"));
        }
        let distance = distance_km
            .map(|d| to_sql("distanceKm", d))
            .transpose()?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                &format!("SELECT {TRIP_COLUMNS} FROM trips WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::trip_from_row,
            )
            .optional()
            .db_context("Failed to query trip")?
            .ok_or_else(|| FleetError::not_found("Trip", id))?;

        if !current.status.can_transition_to(next) {
            return Err(FleetError::InvalidTransition {
                id,
                from: current.status,
                to: next,
            });
        }

        let now = Timestamp::now();
        let changed = tx
            .execute(
                TRANSITION_TRIP_SQL,
                params![
                    next.as_str(),
                    distance,
                    now.to_string(),
                    to_sql("id", id)?,
                    current.status.as_str()
                ],
            )
            .db_context("Failed to update trip status")?;

        if changed == 0 {
            return Err(FleetError::InvalidTransition {
                id,
                from: current.status,
                to: next,
            });
        }

        if let Some(distance) = distance_km {
            Self::add_mileage(&tx, current.vehicle_id, distance)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;
        info!(
            "Trip {id}: {} -> {}",
            current.status.as_str(),
            next.as_str()
        );

        Ok(Trip {
            status: next,
            distance_km: distance_km.or(current.distance_km),
            updated_at: now,
            ..current
        })
    }

    /// Permanently deletes a trip, freeing its resources.
    pub fn delete_trip(&mut self, id: u64) -> Result<()> {
        let deleted = self
            .connection
            .execute(DELETE_TRIP_SQL, params![to_sql("id", id)?])
            .db_context("Failed to delete trip")?;
        if deleted == 0 {
            return Err(FleetError::not_found("Trip", id));
        }
        Ok(())
    }
}
