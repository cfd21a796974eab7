//! Loads what the availability resolver needs and runs it.

use rusqlite::{params, Connection, Row};

use super::utils::{get_enum, get_millis, get_opt_u64, get_u64};
use crate::{
    availability,
    error::{DatabaseResultExt, Result},
    models::{Interval, Trailer, TrailerStatus, TripInterval, User, UserRole, Vehicle, VehicleStatus},
};

// Narrows to occupying trips that start no later than the window end. The
// resolver applies the full closed-interval test.
const OCCUPYING_TRIPS_SQL: &str = "SELECT id, vehicle_id, trailer_id, driver_id, start_at, COALESCE(end_at, start_at), status FROM trips WHERE status IN ('planned', 'in_progress') AND start_at <= ?1 ORDER BY id";

fn trip_interval_from_row(row: &Row) -> rusqlite::Result<TripInterval> {
    Ok(TripInterval {
        trip_id: get_u64(row, 0)?,
        vehicle_id: get_u64(row, 1)?,
        trailer_id: get_opt_u64(row, 2)?,
        driver_id: get_u64(row, 3)?,
        interval: Interval {
            start: get_millis(row, 4)?,
            end: get_millis(row, 5)?,
        },
        status: get_enum(row, 6)?,
    })
}

/// Occupying trips that may overlap `window`.
///
/// Takes a bare connection so trip creation can call it from inside its
/// write transaction.
pub(crate) fn occupying_trips(conn: &Connection, window: &Interval) -> Result<Vec<TripInterval>> {
    let (_, window_end) = window.as_millis();

    let mut stmt = conn
        .prepare(OCCUPYING_TRIPS_SQL)
        .db_context("Failed to prepare query")?;

    let trips = stmt
        .query_map(params![window_end], trip_interval_from_row)
        .db_context("Failed to query occupying trips")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch occupying trips")?;

    Ok(trips)
}

impl super::Database {
    /// Vehicles in an assignable state with no occupying trip overlapping
    /// `window`, in id order.
    pub fn available_vehicles(&self, window: &Interval) -> Result<Vec<Vehicle>> {
        let trips = occupying_trips(&self.connection, window)?;
        let candidates = self.list_vehicles(&VehicleStatus::ELIGIBLE)?;
        Ok(availability::resolve(candidates, &trips, window))
    }

    /// Trailers in an assignable state with no occupying trip overlapping
    /// `window`, in id order.
    pub fn available_trailers(&self, window: &Interval) -> Result<Vec<Trailer>> {
        let trips = occupying_trips(&self.connection, window)?;
        let candidates = self.list_trailers(&TrailerStatus::ELIGIBLE)?;
        Ok(availability::resolve(candidates, &trips, window))
    }

    /// Chauffeurs with no occupying trip overlapping `window`, in id order.
    pub fn available_drivers(&self, window: &Interval) -> Result<Vec<User>> {
        let trips = occupying_trips(&self.connection, window)?;
        let candidates = self.list_users(Some(UserRole::Chauffeur))?;
        Ok(availability::resolve(candidates, &trips, window))
    }
}
