//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation outcome messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
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
        let success = OperationStatus::success("Refreshed 12 plans".to_string());
        assert_eq!(format!("{success}"), "Success: Refreshed 12 plans\n");

        let failure = OperationStatus::failure("Refresh failed".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
    }
}
