//! Status and confirmation message types for operation feedback.

use std::fmt;

/// A one-line confirmation for operations that return no resource, such as
/// resolving a notification.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Notification 3 resolved");
        assert_eq!(success.to_string(), "Success: Notification 3 resolved\n");

        let failure = OperationStatus::failure("Notification 3 was already resolved");
        assert!(failure.to_string().starts_with("Error:"));
    }
}
