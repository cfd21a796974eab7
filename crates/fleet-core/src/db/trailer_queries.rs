//! Trailer CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{get_enum, get_opt_u64, get_timestamp, get_u64, placeholders, to_sql};
use crate::{
    error::{DatabaseResultExt, FleetError, Result},
    models::{Trailer, TrailerStatus, UpdateTrailerRequest},
};

const TRAILER_COLUMNS: &str =
    "id, registration, kind, capacity_kg, status, created_at, updated_at";
const INSERT_TRAILER_SQL: &str = "INSERT INTO trailers (registration, kind, capacity_kg, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TRAILER_SQL: &str = "UPDATE trailers SET registration = ?1, kind = ?2, capacity_kg = ?3, status = ?4, updated_at = ?5 WHERE id = ?6";
const COUNT_TRAILER_TRIPS_SQL: &str = "SELECT COUNT(*) FROM trips WHERE trailer_id = ?1";
const DELETE_TRAILER_SQL: &str = "DELETE FROM trailers WHERE id = ?1";

impl super::Database {
    pub(crate) fn trailer_from_row(row: &Row) -> rusqlite::Result<Trailer> {
        Ok(Trailer {
            id: get_u64(row, 0)?,
            registration: row.get(1)?,
            kind: row.get(2)?,
            capacity_kg: get_opt_u64(row, 3)?,
            status: get_enum(row, 4)?,
            created_at: get_timestamp(row, 5)?,
            updated_at: get_timestamp(row, 6)?,
        })
    }

    /// Registers a new trailer.
    pub fn create_trailer(
        &mut self,
        registration: &str,
        kind: &str,
        capacity_kg: Option<u64>,
        status: TrailerStatus,
    ) -> Result<Trailer> {
        let capacity = capacity_kg.map(|c| to_sql("capacity_kg", c)).transpose()?;
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_TRAILER_SQL,
                params![
                    registration,
                    kind,
                    capacity,
                    status.as_str(),
                    &now_str,
                    &now_str
                ],
            )
            .unique_context("registration", "Failed to insert trailer")?;

        Ok(Trailer {
            id: self.connection.last_insert_rowid() as u64,
            registration: registration.into(),
            kind: kind.into(),
            capacity_kg,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a trailer by its ID.
    pub fn get_trailer(&self, id: u64) -> Result<Option<Trailer>> {
        self.connection
            .query_row(
                &format!("SELECT {TRAILER_COLUMNS} FROM trailers WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::trailer_from_row,
            )
            .optional()
            .db_context("Failed to query trailer")
    }

    /// Lists trailers, optionally restricted to the given statuses, in id
    /// order.
    pub fn list_trailers(&self, statuses: &[TrailerStatus]) -> Result<Vec<Trailer>> {
        let mut query = format!("SELECT {TRAILER_COLUMNS} FROM trailers");
        if !statuses.is_empty() {
            query.push_str(&format!(" WHERE status IN ({})", placeholders(statuses.len())));
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let status_strs: Vec<&str> = statuses.iter().map(TrailerStatus::as_str).collect();
        let trailers = stmt
            .query_map(rusqlite::params_from_iter(status_strs), Self::trailer_from_row)
            .db_context("Failed to query trailers")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trailers")?;

        Ok(trailers)
    }

    /// Applies a partial update. Returns `None` if the trailer doesn't exist.
    pub fn update_trailer(
        &mut self,
        id: u64,
        request: UpdateTrailerRequest,
    ) -> Result<Option<Trailer>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let current = tx
            .query_row(
                &format!("SELECT {TRAILER_COLUMNS} FROM trailers WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::trailer_from_row,
            )
            .optional()
            .db_context("Failed to query trailer")?;

        let Some(current) = current else {
            return Ok(None);
        };

        let now = Timestamp::now();
        let updated = Trailer {
            id: current.id,
            registration: request.registration.unwrap_or(current.registration),
            kind: request.kind.unwrap_or(current.kind),
            capacity_kg: request.capacity_kg.or(current.capacity_kg),
            status: request.status.unwrap_or(current.status),
            created_at: current.created_at,
            updated_at: now,
        };
        let capacity = updated
            .capacity_kg
            .map(|c| to_sql("capacity_kg", c))
            .transpose()?;

        tx.execute(
            UPDATE_TRAILER_SQL,
            params![
                &updated.registration,
                &updated.kind,
                capacity,
                updated.status.as_str(),
                now.to_string(),
                to_sql("id", id)?
            ],
        )
        .unique_context("registration", "Failed to update trailer")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(updated))
    }

    /// Permanently deletes a trailer that never took part in a trip.
    pub fn delete_trailer(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let trips: i64 = tx
            .query_row(COUNT_TRAILER_TRIPS_SQL, params![to_sql("id", id)?], |row| row.get(0))
            .db_context("Failed to count trailer trips")?;
        if trips > 0 {
            return Err(FleetError::invalid_input("id").with_reason(format!(
                "trailer {id} has {trips} trip(s); set its status to inactive instead"
            )));
        }

        let deleted = tx
            .execute(DELETE_TRAILER_SQL, params![to_sql("id", id)?])
            .db_context("Failed to delete trailer")?;
        if deleted == 0 {
            return Err(FleetError::not_found("Trailer", id));
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
