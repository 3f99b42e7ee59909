//! UserDao trait — low-level access to the `users` collection.
//!
//! [`UserRepository`] combines it with [`SessionDao`] to fulfil the
//! user/session operations.
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`SessionDao`]: crate::dao::SessionDao

use async_trait::async_trait;
use reelstore_core::{Interface, Preferences, ReelResult, User};

/// Low-level user data access object.
#[async_trait]
pub trait UserDao: Interface + Send + Sync {
    /// Inserts a new user with majority write concern.
    ///
    /// Fails with `Conflict` if the email is already taken.
    async fn insert(&self, user: &User) -> ReelResult<()>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> ReelResult<Option<User>>;

    /// Replaces the preferences of the user with `email`.
    /// Returns the number of matched users.
    async fn update_preferences(&self, email: &str, preferences: &Preferences) -> ReelResult<u64>;

    /// Deletes every user with `email`. Returns the number deleted.
    async fn delete_by_email(&self, email: &str) -> ReelResult<u64>;
}
