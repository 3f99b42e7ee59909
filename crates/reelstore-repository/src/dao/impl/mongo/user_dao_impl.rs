//! MongoDB implementation of [`UserDao`].

use super::USERS_COLLECTION;
use crate::{dao::UserDao, DatabaseClientInterface};
use async_trait::async_trait;
use mongodb::bson::{self, doc};
use mongodb::options::{Acknowledgment, WriteConcern};
use mongodb::Collection;
use reelstore_core::{Preferences, ReelError, ReelResult, User};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// `users` collection DAO.
#[derive(Component, Clone)]
#[shaku(interface = UserDao)]
pub struct MongoUserDaoImpl {
    #[shaku(inject)]
    client: Arc<dyn DatabaseClientInterface>,
}

impl MongoUserDaoImpl {
    /// Creates a new DAO over the given client.
    #[must_use]
    pub fn new(client: Arc<dyn DatabaseClientInterface>) -> Self {
        Self { client }
    }

    fn users(&self) -> Collection<User> {
        self.client.database().collection(USERS_COLLECTION)
    }
}

#[async_trait]
impl UserDao for MongoUserDaoImpl {
    async fn insert(&self, user: &User) -> ReelResult<()> {
        debug!("Inserting user: {}", user.email);

        let majority = WriteConcern::builder().w(Acknowledgment::Majority).build();
        self.users()
            .insert_one(user)
            .write_concern(majority)
            .await
            .map_err(|e| match ReelError::from(e) {
                ReelError::Conflict(_) => {
                    ReelError::conflict(format!("User {} is already in the database", user.email))
                }
                other => other,
            })?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> ReelResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user = self
            .users()
            .find_one(doc! { "email": email })
            .await?;
        Ok(user)
    }

    async fn update_preferences(&self, email: &str, preferences: &Preferences) -> ReelResult<u64> {
        debug!("Updating preferences for user: {}", email);

        let preferences = bson::to_bson(preferences)?;
        let result = self
            .users()
            .update_one(
                doc! { "email": email },
                doc! { "$set": { "preferences": preferences } },
            )
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_email(&self, email: &str) -> ReelResult<u64> {
        debug!("Deleting user: {}", email);

        let result = self
            .users()
            .delete_many(doc! { "email": email })
            .await?;
        Ok(result.deleted_count)
    }
}

impl std::fmt::Debug for MongoUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoUserDaoImpl")
            .field("collection", &USERS_COLLECTION)
            .finish()
    }
}
