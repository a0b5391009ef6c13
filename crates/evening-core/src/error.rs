//! Error types for the evening planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Category identifier has no template in the catalog
    #[error("Unknown category '{id}'")]
    UnknownCategory { id: String },
    /// The plan request contains no selected activities
    #[error("Please select at least one activity preference")]
    NoActivitiesSelected,
    /// Required form fields were left blank; `fields` names the blank ones
    #[error("Please fill in budget and location")]
    MissingField { fields: Vec<&'static str> },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Date/time parsing or arithmetic errors
    #[error("Date/time error: {source}")]
    InvalidDateTime {
        #[from]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an unknown category error for the given identifier.
    pub fn unknown_category(id: impl Into<String>) -> Self {
        Self::UnknownCategory { id: id.into() }
    }

    /// Whether the error is a user-correctable validation failure rather than
    /// a contract violation or environment problem.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoActivitiesSelected | Self::MissingField { .. } | Self::InvalidInput { .. }
        )
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = PlannerError::MissingField {
            fields: vec!["budget", "location"],
        };
        assert_eq!(err.to_string(), "Please fill in budget and location");

        let err = PlannerError::MissingField {
            fields: vec!["location"],
        };
        assert_eq!(err.to_string(), "Please fill in budget and location");
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("budget").with_reason("not a number");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'budget': not a number"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_category_is_not_validation() {
        let err = PlannerError::unknown_category("brunch");
        assert_eq!(err.to_string(), "Unknown category 'brunch'");
        assert!(!err.is_validation());
    }
}
