//! User entity.

use super::super::value_objects::Email;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form user preferences, replaced wholesale on update.
pub type Preferences = BTreeMap<String, serde_json::Value>;

/// A registered user, unique by email.
///
/// Documents may carry more fields than these; unknown fields are ignored
/// on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,

    /// Unique email address.
    pub email: Email,

    /// Password hash, stored under the `password` key.
    #[serde(rename = "password")]
    pub hashedpw: String,

    /// User preferences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl User {
    /// Creates a new user without preferences.
    #[must_use]
    pub fn new(name: impl Into<String>, email: Email, hashedpw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email,
            hashedpw: hashedpw.into(),
            preferences: None,
        }
    }

    /// Sets the initial preferences.
    #[must_use]
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Looks up a single preference.
    #[must_use]
    pub fn preference(&self, key: &str) -> Option<&serde_json::Value> {
        self.preferences.as_ref().and_then(|p| p.get(key))
    }
}
