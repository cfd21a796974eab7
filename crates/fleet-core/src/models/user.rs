//! User model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::UserRole;

/// A user account. Users with [`UserRole::Chauffeur`] are drivers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: u64,

    /// Display name
    pub name: String,

    /// Login e-mail, unique
    pub email: String,

    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Role deciding what the user can be assigned to
    pub role: UserRole,

    /// Timestamp when the account was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the account was last modified (UTC)
    pub updated_at: Timestamp,
}

impl User {
    /// Whether the user can drive trips.
    pub fn is_driver(&self) -> bool {
        self.role == UserRole::Chauffeur
    }
}
