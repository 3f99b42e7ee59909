//! MongoDB implementation of [`SessionDao`].

use super::SESSIONS_COLLECTION;
use crate::{dao::SessionDao, DatabaseClientInterface};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;
use reelstore_core::{ReelResult, Session};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// `sessions` collection DAO.
#[derive(Component, Clone)]
#[shaku(interface = SessionDao)]
pub struct MongoSessionDaoImpl {
    #[shaku(inject)]
    client: Arc<dyn DatabaseClientInterface>,
}

impl MongoSessionDaoImpl {
    /// Creates a new DAO over the given client.
    #[must_use]
    pub fn new(client: Arc<dyn DatabaseClientInterface>) -> Self {
        Self { client }
    }

    fn sessions(&self) -> Collection<Session> {
        self.client.database().collection(SESSIONS_COLLECTION)
    }
}

#[async_trait]
impl SessionDao for MongoSessionDaoImpl {
    async fn upsert_token(&self, user_id: &str, jwt: &str) -> ReelResult<()> {
        debug!("Upserting session for user: {}", user_id);

        // The equality filter on user_id is copied into the inserted document.
        let result = self
            .sessions()
            .update_one(doc! { "user_id": user_id }, doc! { "$set": { "jwt": jwt } })
            .upsert(true)
            .await?;

        if result.upserted_id.is_some() {
            debug!("Created session for user: {}", user_id);
        }
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> ReelResult<Option<Session>> {
        debug!("Finding session for user: {}", user_id);

        let session = self.sessions().find_one(doc! { "user_id": user_id }).await?;
        Ok(session)
    }

    async fn delete_by_user_id(&self, user_id: &str) -> ReelResult<u64> {
        debug!("Deleting sessions for user: {}", user_id);

        let result = self.sessions().delete_many(doc! { "user_id": user_id }).await?;
        Ok(result.deleted_count)
    }
}

impl std::fmt::Debug for MongoSessionDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoSessionDaoImpl")
            .field("collection", &SESSIONS_COLLECTION)
            .finish()
    }
}
