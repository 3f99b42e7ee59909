//! Session entity.

use serde::{Deserialize, Serialize};

/// Login session; at most one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Owning user's identifier (the user's email).
    pub user_id: String,

    /// Opaque session token.
    pub jwt: String,
}

impl Session {
    /// Creates a new session.
    #[must_use]
    pub fn new(user_id: impl Into<String>, jwt: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            jwt: jwt.into(),
        }
    }
}
