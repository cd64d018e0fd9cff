use mongodb::{options::{ClientOptions, Credential, ResolverConfig}, Client, Database};
use tracing::info;

use crate::config::MongoConfig;

/// Open one shared database handle; every repository borrows its collection
/// from it so the process keeps a single connection pool.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some("WebitofCrmBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout =
        Some(std::time::Duration::from_secs(config.connection_timeout_secs));

    if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    info!(database = %config.database, "MongoDB client initialized");
    Ok(client.database(&config.database))
}
