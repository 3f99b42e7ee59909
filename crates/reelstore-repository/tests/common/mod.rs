//! Common test infrastructure for database integration tests.

#![allow(dead_code)]

use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use reelstore_config::DatabaseConfig;
use reelstore_core::telemetry::{init_tracing, TelemetryConfig};
use reelstore_repository::{
    module_with_client, user_repository, DatabaseClient, DatabaseClientInterface,
    RepositoryModule, UserRepository, USERS_COLLECTION,
};
use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mongo::Mongo;

/// Test database container wrapper.
///
/// Manages a MongoDB testcontainer lifecycle and provides the repository
/// module built on top of it.
pub struct TestDatabase {
    _container: ContainerAsync<Mongo>,
    client: DatabaseClient,
    module: Arc<RepositoryModule>,
}

impl TestDatabase {
    /// Creates a new test database with a fresh MongoDB container.
    ///
    /// Creates the unique index on `users.email` after startup.
    pub async fn new() -> Self {
        let _ = init_tracing(&TelemetryConfig::default());

        let container = Mongo::default()
            .start()
            .await
            .expect("Failed to start MongoDB container");

        let port = container
            .get_host_port_ipv4(27017)
            .await
            .expect("Failed to get MongoDB port");

        let config = DatabaseConfig {
            uri: format!("mongodb://127.0.0.1:{}/?directConnection=true", port),
            database: "reelstore_test".to_string(),
            app_name: "reelstore-tests".to_string(),
            min_pool_size: 0,
            max_pool_size: 20,
            connect_timeout_secs: 5,
            server_selection_timeout_secs: 5,
        };

        let client = Self::connect_with_retry(&config, 30).await;

        client
            .database()
            .collection::<Document>(USERS_COLLECTION)
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "email": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await
            .expect("Failed to create users.email index");

        let module = Arc::new(module_with_client(client.clone()));

        Self {
            _container: container,
            client,
            module,
        }
    }

    /// Returns the repository resolved from the DI module.
    pub fn repo(&self) -> Arc<dyn UserRepository> {
        user_repository(&self.module)
    }

    /// Returns the underlying client.
    pub fn client(&self) -> &DatabaseClient {
        &self.client
    }

    /// Counts raw documents in a collection matching `filter`.
    pub async fn count(&self, collection: &str, filter: Document) -> u64 {
        self.client
            .database()
            .collection::<Document>(collection)
            .count_documents(filter)
            .await
            .expect("Failed to count documents")
    }

    /// Inserts a document as another tool would, bypassing the repository.
    pub async fn insert_raw(&self, collection: &str, document: Document) {
        self.client
            .database()
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .expect("Failed to insert raw document");
    }

    /// Connects to the database with retry logic.
    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabaseClient {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match DatabaseClient::connect(config).await {
                Ok(client) => return client,
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!("Failed to connect to database after {} attempts: {}", max_attempts, e);
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
