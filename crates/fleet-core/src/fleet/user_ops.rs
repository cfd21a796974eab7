//! User operations for the Fleet.

use super::Fleet;
use crate::{
    display::Users,
    error::Result,
    models::User,
    params::{CreateUser, Id, ListUsers},
};

impl Fleet {
    /// Creates a user. Chauffeurs can drive trips; admins receive alerts.
    pub async fn create_user(&self, params: &CreateUser) -> Result<User> {
        params.validate()?;
        let params = params.clone();

        self.with_db(move |db| {
            db.create_user(
                params.name.trim(),
                params.email.trim(),
                params.phone.as_deref(),
                params.role,
            )
        })
        .await
    }

    /// Retrieves a user by its ID.
    pub async fn get_user(&self, params: &Id) -> Result<Option<User>> {
        let id = params.id;
        self.with_db(move |db| db.get_user(id)).await
    }

    /// Lists users, optionally restricted to one role.
    pub async fn list_users(&self, params: &ListUsers) -> Result<Users> {
        let role = params.role;
        let users = self.with_db(move |db| db.list_users(role)).await?;
        Ok(Users(users))
    }

    /// Deletes a user who never drove a trip, returning it.
    pub async fn delete_user(&self, params: &Id) -> Result<Option<User>> {
        let id = params.id;
        self.with_db(move |db| {
            let Some(user) = db.get_user(id)? else {
                return Ok(None);
            };
            db.delete_user(id)?;
            Ok(Some(user))
        })
        .await
    }
}
