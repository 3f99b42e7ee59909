//! SessionDao trait — low-level access to the `sessions` collection.

use async_trait::async_trait;
use reelstore_core::{Interface, ReelResult, Session};

/// Low-level session data access object.
#[async_trait]
pub trait SessionDao: Interface + Send + Sync {
    /// Sets the token of the session for `user_id`, creating the session if
    /// there is none. Must be a single atomic operation.
    async fn upsert_token(&self, user_id: &str, jwt: &str) -> ReelResult<()>;

    /// Finds the session for `user_id`.
    async fn find_by_user_id(&self, user_id: &str) -> ReelResult<Option<Session>>;

    /// Deletes all sessions for `user_id`. Returns the number deleted.
    async fn delete_by_user_id(&self, user_id: &str) -> ReelResult<u64>;
}
