//! Repository trait definitions.

use async_trait::async_trait;
use reelstore_core::{Interface, Preferences, ReelResult, Session, User};

/// User and session repository.
///
/// Lookups return `Ok(None)` when nothing matches. Deletions succeed
/// whether or not anything matched. Use
/// [`ReelResultExt::into_flag`](reelstore_core::ReelResultExt::into_flag)
/// for a plain success/failure view of any operation.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts a new user with majority write concern.
    ///
    /// Fails with `Conflict` if the email is already registered and with
    /// `Database` on any other backend error.
    async fn add_user(&self, user: &User) -> ReelResult<()>;

    /// Creates the session for `user_id`, or replaces its token if one
    /// already exists.
    async fn create_user_session(&self, user_id: &str, jwt: &str) -> ReelResult<()>;

    /// Finds a user by email.
    async fn get_user(&self, email: &str) -> ReelResult<Option<User>>;

    /// Finds the session for `user_id`.
    async fn get_user_session(&self, user_id: &str) -> ReelResult<Option<Session>>;

    /// Deletes all sessions for `user_id`. Returns the number deleted.
    async fn delete_user_sessions(&self, user_id: &str) -> ReelResult<u64>;

    /// Deletes the user with `email` and all of its sessions.
    async fn delete_user(&self, email: &str) -> ReelResult<()>;

    /// Replaces the user's preferences wholesale.
    ///
    /// Fails with `Validation` when `preferences` is `None`; the stored user
    /// is left untouched.
    async fn update_user_preferences(
        &self,
        email: &str,
        preferences: Option<&Preferences>,
    ) -> ReelResult<()>;
}
