//! Email value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::ValidateEmail;

/// Error type for email validation.
#[derive(Debug, Error)]
#[error("Invalid email address: {0}")]
pub struct EmailError(String);

/// Email address, the natural key of a user.
///
/// Kept exactly as given. Lookups match it byte for byte, so the spelling a
/// user registers with is the one every later call must use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email after validating the format.
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();

        if !email.validate_email() {
            return Err(EmailError(email));
        }

        Ok(Self(email))
    }

    /// Creates a new Email without validation.
    ///
    /// Used for values read back from the store and for lookup keys.
    #[must_use]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Returns the email as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Email {
    fn from(value: String) -> Self {
        Self::new_unchecked(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("kirk@enterprise.org").unwrap();
        assert_eq!(email.as_str(), "kirk@enterprise.org");
    }

    #[test]
    fn test_email_keeps_spelling() {
        let email = Email::new("Spock@Enterprise.ORG").unwrap();
        assert_eq!(email.as_str(), "Spock@Enterprise.ORG");
        assert_ne!(email, Email::new_unchecked("spock@enterprise.org"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(Email::new("invalid").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("test@").is_err());
        assert!(Email::new("bad").unwrap_err().to_string().contains("Invalid email address"));
    }

    #[test]
    fn test_stored_values_are_not_rejected() {
        // Legacy documents may hold addresses that would fail validation.
        let email: Email = serde_json::from_str("\"Legacy-Account\"").unwrap();
        assert_eq!(email.as_str(), "Legacy-Account");
    }

    #[test]
    fn test_email_serializes_as_string() {
        let email = Email::new("uhura@enterprise.org").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"uhura@enterprise.org\"");
    }
}
