//! `UserRepositoryImpl` — Repository layer implementation.
//!
//! Implements the [`UserRepository`] interface by coordinating a
//! [`UserDao`] and a [`SessionDao`]:
//!
//! ```text
//! Caller
//!   ↓ Arc<dyn UserRepository>
//! UserRepositoryImpl          ← argument checks, logging, coordination
//!   ↓ Arc<dyn UserDao>, Arc<dyn SessionDao>
//! MongoUserDaoImpl / MongoSessionDaoImpl
//!   ↓
//! MongoDB
//! ```
//!
//! [`UserRepository`]: crate::traits::UserRepository
//! [`UserDao`]: crate::dao::UserDao
//! [`SessionDao`]: crate::dao::SessionDao

use crate::dao::{SessionDao, UserDao};
use crate::traits::UserRepository;
use async_trait::async_trait;
use reelstore_core::{Preferences, ReelError, ReelResult, Session, User};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, error};

/// Repository implementation that orchestrates the user and session DAOs.
#[derive(Component)]
#[shaku(interface = UserRepository)]
pub struct UserRepositoryImpl {
    #[shaku(inject)]
    user_dao: Arc<dyn UserDao>,

    #[shaku(inject)]
    session_dao: Arc<dyn SessionDao>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` over the given DAOs.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>, session_dao: Arc<dyn SessionDao>) -> Self {
        Self {
            user_dao,
            session_dao,
        }
    }
}

/// Logs a failed operation with its error code before handing it back.
fn logged<T>(operation: &'static str, result: ReelResult<T>) -> ReelResult<T> {
    if let Err(e) = &result {
        error!(operation, code = e.error_code(), "An error occurred: {}", e);
    }
    result
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn add_user(&self, user: &User) -> ReelResult<()> {
        debug!("Repository: add_user {}", user.email);
        logged("add_user", self.user_dao.insert(user).await)
    }

    async fn create_user_session(&self, user_id: &str, jwt: &str) -> ReelResult<()> {
        debug!("Repository: create_user_session {}", user_id);
        logged(
            "create_user_session",
            self.session_dao.upsert_token(user_id, jwt).await,
        )
    }

    async fn get_user(&self, email: &str) -> ReelResult<Option<User>> {
        debug!("Repository: get_user {}", email);
        logged("get_user", self.user_dao.find_by_email(email).await)
    }

    async fn get_user_session(&self, user_id: &str) -> ReelResult<Option<Session>> {
        debug!("Repository: get_user_session {}", user_id);
        logged(
            "get_user_session",
            self.session_dao.find_by_user_id(user_id).await,
        )
    }

    async fn delete_user_sessions(&self, user_id: &str) -> ReelResult<u64> {
        debug!("Repository: delete_user_sessions {}", user_id);
        logged(
            "delete_user_sessions",
            self.session_dao.delete_by_user_id(user_id).await,
        )
    }

    async fn delete_user(&self, email: &str) -> ReelResult<()> {
        debug!("Repository: delete_user {}", email);

        // Sessions are keyed by the email exactly as the caller spells it.
        let sessions = logged(
            "delete_user",
            self.session_dao.delete_by_user_id(email).await,
        )?;
        let users = logged("delete_user", self.user_dao.delete_by_email(email).await)?;

        debug!(sessions, users, "Deleted user {}", email);
        Ok(())
    }

    async fn update_user_preferences(
        &self,
        email: &str,
        preferences: Option<&Preferences>,
    ) -> ReelResult<()> {
        debug!("Repository: update_user_preferences {}", email);

        let Some(preferences) = preferences else {
            return logged(
                "update_user_preferences",
                Err(ReelError::validation("user preferences cannot be null")),
            );
        };

        let matched = logged(
            "update_user_preferences",
            self.user_dao.update_preferences(email, preferences).await,
        )?;
        if matched == 0 {
            debug!("No user with email {} to update", email);
        }
        Ok(())
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
