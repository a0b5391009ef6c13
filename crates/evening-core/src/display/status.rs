//! Status messages for operation feedback.

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
        let success = OperationStatus::success("Catalog written to catalog.json".to_string());
        assert_eq!(format!("{success}"), "Success: Catalog written to catalog.json\n");

        let failure = OperationStatus {
            message: "catalog.json already exists".to_string(),
            success: false,
        };
        assert_eq!(format!("{failure}"), "Error: catalog.json already exists\n");
    }
}
