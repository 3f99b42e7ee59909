//! Unified error types for the data-access layer.

use std::fmt::Debug;
use thiserror::Error;

/// Server error codes reported for unique index violations.
pub const DUPLICATE_KEY_CODES: [i32; 3] = [11000, 11001, 12582];

/// Unified error type for Reelstore.
///
/// The taxonomy is deliberately coarse: callers need to tell a duplicate
/// entity and a bad argument apart from "the backend failed", and nothing
/// more.
#[derive(Error, Debug)]
pub enum ReelError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Invalid or missing argument
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate entity (unique key violation)
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_))
    }

    /// True for failures the caller can act on (duplicate entity, bad
    /// argument), as opposed to backend failures.
    #[must_use]
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::Conflict(_) | Self::Validation(_))
    }
}

/// Returns `true` if `code` is one of the server's duplicate-key codes.
#[must_use]
pub fn is_duplicate_key_code(code: i32) -> bool {
    DUPLICATE_KEY_CODES.contains(&code)
}

/// Returns `true` if the driver error was caused by a unique index violation.
#[cfg(feature = "mongodb")]
#[must_use]
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            is_duplicate_key_code(write_error.code)
        }
        ErrorKind::Command(command_error) => is_duplicate_key_code(command_error.code),
        _ => false,
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for ReelError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            return Self::Conflict(err.to_string());
        }
        Self::Database(err.to_string())
    }
}

#[cfg(feature = "mongodb")]
impl From<mongodb::bson::ser::Error> for ReelError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Internal(format!("BSON serialization error: {}", err))
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ReelError::not_found("User", "a@b.com").error_code(), "NOT_FOUND");
        assert_eq!(ReelError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(ReelError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(ReelError::database("db").error_code(), "DATABASE_ERROR");
        assert_eq!(ReelError::Configuration("cfg".to_string()).error_code(), "CONFIGURATION_ERROR");
        assert_eq!(ReelError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_retriable_errors() {
        assert!(ReelError::database("connection lost").is_retriable());
        assert!(!ReelError::conflict("dup").is_retriable());
        assert!(!ReelError::validation("bad input").is_retriable());
        assert!(!ReelError::not_found("User", 1).is_retriable());
    }

    #[test]
    fn test_caller_errors() {
        assert!(ReelError::conflict("dup").is_caller_error());
        assert!(ReelError::validation("null").is_caller_error());
        assert!(!ReelError::database("down").is_caller_error());
        assert!(!ReelError::internal("oops").is_caller_error());
    }

    #[test]
    fn test_duplicate_key_codes() {
        assert!(is_duplicate_key_code(11000));
        assert!(is_duplicate_key_code(11001));
        assert!(is_duplicate_key_code(12582));
        assert!(!is_duplicate_key_code(0));
        assert!(!is_duplicate_key_code(121)); // document validation failure
    }

    #[test]
    fn test_error_constructors() {
        let not_found = ReelError::not_found("User", "123");
        assert!(not_found.to_string().contains("User"));

        let conflict = ReelError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));

        let validation = ReelError::validation("preferences cannot be null");
        assert!(validation.to_string().contains("preferences"));
    }

    #[test]
    fn test_json_error_maps_to_internal() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ReelError = err.into();
        assert!(matches!(err, ReelError::Internal(_)));
    }
}
