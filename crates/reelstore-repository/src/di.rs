//! Dependency injection module using Shaku.

use crate::{
    DatabaseClient, DatabaseClientParameters, MongoSessionDaoImpl, MongoUserDaoImpl,
    UserRepository, UserRepositoryImpl,
};
use reelstore_config::DatabaseConfig;
use reelstore_core::{module, HasComponent, ReelResult};
use std::sync::Arc;

// Repository layer: MongoDB client, both DAOs and the repository that
// coordinates them.
module! {
    pub RepositoryModule {
        components = [
            DatabaseClient,
            MongoUserDaoImpl,
            MongoSessionDaoImpl,
            UserRepositoryImpl,
        ],
        providers = [],
    }
}

/// Connects to MongoDB and builds the repository module.
pub async fn build_repository_module(config: &DatabaseConfig) -> ReelResult<Arc<RepositoryModule>> {
    let client = DatabaseClient::connect(config).await?;
    Ok(Arc::new(module_with_client(client)))
}

/// Builds the repository module around an already connected client.
#[must_use]
pub fn module_with_client(client: DatabaseClient) -> RepositoryModule {
    use crate::DatabaseClientInterface;

    RepositoryModule::builder()
        .with_component_parameters::<DatabaseClient>(DatabaseClientParameters {
            database: client.database().clone(),
            client: client.client().clone(),
        })
        .build()
}

/// Resolves the user repository from a built module.
#[must_use]
pub fn user_repository(module: &RepositoryModule) -> Arc<dyn UserRepository> {
    module.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;
    use mongodb::Client;

    #[tokio::test]
    async fn test_module_resolves_repository_from_client_parameters() {
        // Client construction is lazy; nothing here talks to a server.
        let options = ClientOptions::parse("mongodb://localhost:27017").await.unwrap();
        let client = DatabaseClient::with_client(Client::with_options(options).unwrap(), "reelstore_di");

        let module = module_with_client(client);
        let _repository = user_repository(&module);

        let resolved: Arc<dyn crate::DatabaseClientInterface> = module.resolve();
        assert_eq!(resolved.database().name(), "reelstore_di");
    }
}
