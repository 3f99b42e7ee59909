//! MongoDB client management.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use reelstore_config::DatabaseConfig;
use reelstore_core::{Interface, ReelError, ReelResult};
use shaku::Component;
use tracing::{info, warn};

/// Interface for database client operations.
///
/// DAOs reach their collections through this trait so the client can be
/// injected.
#[async_trait]
pub trait DatabaseClientInterface: Interface + Send + Sync {
    /// Returns the configured database.
    fn database(&self) -> &Database;

    /// Checks that the server answers a `ping`.
    async fn health_check(&self) -> ReelResult<()>;

    /// Shuts the driver down, waiting for in-flight operations.
    async fn close(&self);
}

/// Driver client plus the selected database.
#[derive(Component, Clone)]
#[shaku(interface = DatabaseClientInterface)]
pub struct DatabaseClient {
    client: Client,
    database: Database,
}

impl DatabaseClient {
    /// Builds a client from configuration and verifies the server is reachable.
    pub async fn connect(config: &DatabaseConfig) -> ReelResult<Self> {
        info!(database = %config.database, "Connecting to MongoDB...");

        let mut options = ClientOptions::parse(&config.uri).await.map_err(|e| {
            warn!("Invalid MongoDB connection string: {}", e);
            ReelError::Database(format!("Invalid connection string: {}", e))
        })?;
        options.app_name = Some(config.app_name.clone());
        options.min_pool_size = Some(config.min_pool_size);
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(config.connect_timeout());
        options.server_selection_timeout = Some(config.server_selection_timeout());

        let client = Client::with_options(options)
            .map_err(|e| ReelError::Database(format!("Failed to create client: {}", e)))?;
        let database = client.database(&config.database);

        let this = Self { client, database };
        this.ping().await.map_err(|e| {
            warn!("Failed to connect to MongoDB: {}", e);
            ReelError::Database(format!("Failed to connect: {}", e))
        })?;

        info!("MongoDB connection established");
        Ok(this)
    }

    /// Wraps an existing client (for Shaku injection).
    #[must_use]
    pub fn with_client(client: Client, database: &str) -> Self {
        let database = client.database(database);
        Self { client, database }
    }

    /// Returns the underlying driver client.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn ping(&self) -> ReelResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[async_trait]
impl DatabaseClientInterface for DatabaseClient {
    fn database(&self) -> &Database {
        &self.database
    }

    async fn health_check(&self) -> ReelResult<()> {
        self.ping()
            .await
            .map_err(|e| ReelError::Database(format!("Health check failed: {}", e)))
    }

    async fn close(&self) {
        info!("Closing MongoDB client...");
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}

impl std::fmt::Debug for DatabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseClient")
            .field("database", &self.database.name())
            .finish_non_exhaustive()
    }
}
