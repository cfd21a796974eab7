//! Alert notifications.
//!
//! At most one unresolved notification exists per `(user, vehicle, type)`.
//! The partial unique index `idx_notifications_open` enforces it and
//! `INSERT OR IGNORE` makes raising an alert an atomic upsert.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{get_enum, get_opt_timestamp, get_timestamp, get_u64, to_sql};
use crate::{
    alerts::AlertCandidate,
    error::{DatabaseResultExt, FleetError, Result},
    models::{Notification, UserRole},
};

const NOTIFICATION_COLUMNS: &str =
    "id, user_id, vehicle_id, alert_type, severity, message, resolved, created_at, resolved_at";
const INSERT_ALERT_SQL: &str = "INSERT OR IGNORE INTO notifications (user_id, vehicle_id, alert_type, severity, message, resolved, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)";
const ADMIN_IDS_SQL: &str = "SELECT id FROM users WHERE role = ?1 ORDER BY id";
const RESOLVE_SQL: &str =
    "UPDATE notifications SET resolved = 1, resolved_at = ?1 WHERE id = ?2 AND resolved = 0";

impl super::Database {
    fn notification_from_row(row: &Row) -> rusqlite::Result<Notification> {
        Ok(Notification {
            id: get_u64(row, 0)?,
            user_id: get_u64(row, 1)?,
            vehicle_id: get_u64(row, 2)?,
            alert_type: get_enum(row, 3)?,
            severity: get_enum(row, 4)?,
            message: row.get(5)?,
            resolved: row.get(6)?,
            created_at: get_timestamp(row, 7)?,
            resolved_at: get_opt_timestamp(row, 8)?,
        })
    }

    /// Addresses each candidate to every admin, skipping pairs that already
    /// have an open notification of the same type for the same vehicle.
    ///
    /// Returns the number of notifications actually created.
    pub fn raise_alerts(&mut self, candidates: &[AlertCandidate]) -> Result<usize> {
        if candidates.is_empty() {
            return Ok(0);
        }

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let admins = {
            let mut stmt = tx
                .prepare(ADMIN_IDS_SQL)
                .db_context("Failed to prepare query")?;
            let ids = stmt
                .query_map(params![UserRole::Admin.as_str()], |row| get_u64(row, 0))
                .db_context("Failed to query admins")?
                .collect::<std::result::Result<Vec<_>, _>>()
                .db_context("Failed to fetch admins")?;
            ids
        };

        let now = Timestamp::now().to_string();
        let mut created = 0;
        {
            let mut insert = tx
                .prepare(INSERT_ALERT_SQL)
                .db_context("Failed to prepare insert")?;
            for candidate in candidates {
                for &admin in &admins {
                    created += insert
                        .execute(params![
                            to_sql("user_id", admin)?,
                            to_sql("vehicle_id", candidate.vehicle_id)?,
                            candidate.alert_type.as_str(),
                            candidate.severity.as_str(),
                            &candidate.message,
                            &now
                        ])
                        .db_context("Failed to insert notification")?;
                }
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(created)
    }

    /// Retrieves a notification by its ID.
    pub fn get_notification(&self, id: u64) -> Result<Option<Notification>> {
        self.connection
            .query_row(
                &format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::notification_from_row,
            )
            .optional()
            .db_context("Failed to query notification")
    }

    /// Lists notifications, newest first.
    pub fn list_notifications(
        &self,
        user_id: Option<u64>,
        unresolved_only: bool,
    ) -> Result<Vec<Notification>> {
        let mut conditions = Vec::new();
        if user_id.is_some() {
            conditions.push("user_id = ?1");
        }
        if unresolved_only {
            conditions.push("resolved = 0");
        }

        let mut query = format!("SELECT {NOTIFICATION_COLUMNS} FROM notifications");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let ids: Vec<i64> = user_id
            .iter()
            .map(|&id| to_sql("user_id", id))
            .collect::<Result<_>>()?;
        let notifications = stmt
            .query_map(rusqlite::params_from_iter(ids), Self::notification_from_row)
            .db_context("Failed to query notifications")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch notifications")?;

        Ok(notifications)
    }

    /// Marks a notification resolved. A later check may raise the same alert
    /// again.
    ///
    /// Returns `false` if it was already resolved.
    pub fn resolve_notification(&mut self, id: u64) -> Result<bool> {
        let changed = self
            .connection
            .execute(RESOLVE_SQL, params![Timestamp::now().to_string(), to_sql("id", id)?])
            .db_context("Failed to resolve notification")?;
        if changed > 0 {
            return Ok(true);
        }

        match self.get_notification(id)? {
            Some(_) => Ok(false),
            None => Err(FleetError::not_found("Notification", id)),
        }
    }
}
