//! Notification model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{AlertSeverity, AlertType};

/// An alert addressed to a user about a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Unique identifier for the notification
    pub id: u64,

    /// Recipient
    pub user_id: u64,

    /// Vehicle the alert is about
    pub vehicle_id: u64,

    /// What triggered the alert
    pub alert_type: AlertType,

    /// How urgent it is
    pub severity: AlertSeverity,

    /// Human readable text
    pub message: String,

    /// Whether someone acknowledged and handled it
    pub resolved: bool,

    /// Timestamp when the alert was raised (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the alert was resolved (UTC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
}
