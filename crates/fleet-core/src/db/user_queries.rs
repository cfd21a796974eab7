//! User operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::utils::{get_enum, get_timestamp, get_u64, to_sql};
use crate::{
    error::{DatabaseResultExt, FleetError, Result},
    models::{User, UserRole},
};

const USER_COLUMNS: &str = "id, name, email, phone, role, created_at, updated_at";
const INSERT_USER_SQL: &str = "INSERT INTO users (name, email, phone, role, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const COUNT_DRIVER_TRIPS_SQL: &str = "SELECT COUNT(*) FROM trips WHERE driver_id = ?1";
const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id = ?1";

impl super::Database {
    pub(crate) fn user_from_row(row: &Row) -> rusqlite::Result<User> {
        Ok(User {
            id: get_u64(row, 0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            role: get_enum(row, 4)?,
            created_at: get_timestamp(row, 5)?,
            updated_at: get_timestamp(row, 6)?,
        })
    }

    /// Creates a user account.
    pub fn create_user(
        &mut self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        role: UserRole,
    ) -> Result<User> {
        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_USER_SQL,
                params![name, email, phone, role.as_str(), &now_str, &now_str],
            )
            .unique_context("email", "Failed to insert user")?;

        Ok(User {
            id: self.connection.last_insert_rowid() as u64,
            name: name.into(),
            email: email.into(),
            phone: phone.map(String::from),
            role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a user by its ID.
    pub fn get_user(&self, id: u64) -> Result<Option<User>> {
        self.connection
            .query_row(
                &format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?1"),
                params![to_sql("id", id)?],
                Self::user_from_row,
            )
            .optional()
            .db_context("Failed to query user")
    }

    /// Lists users in id order, optionally only those with `role`.
    pub fn list_users(&self, role: Option<UserRole>) -> Result<Vec<User>> {
        let mut query = format!("SELECT {USER_COLUMNS} FROM users");
        if role.is_some() {
            query.push_str(" WHERE role = ?1");
        }
        query.push_str(" ORDER BY id");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let role_param: Vec<&str> = role.iter().map(UserRole::as_str).collect();
        let users = stmt
            .query_map(rusqlite::params_from_iter(role_param), Self::user_from_row)
            .db_context("Failed to query users")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch users")?;

        Ok(users)
    }

    /// Permanently deletes a user who never drove a trip. Their
    /// notifications go with them.
    pub fn delete_user(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let trips: i64 = tx
            .query_row(COUNT_DRIVER_TRIPS_SQL, params![to_sql("id", id)?], |row| row.get(0))
            .db_context("Failed to count driver trips")?;
        if trips > 0 {
            return Err(FleetError::invalid_input("id")
                .with_reason(format!("user {id} is the driver of {trips} trip(s)")));
        }

        let deleted = tx
            .execute(DELETE_USER_SQL, params![to_sql("id", id)?])
            .db_context("Failed to delete user")?;
        if deleted == 0 {
            return Err(FleetError::not_found("User", id));
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
