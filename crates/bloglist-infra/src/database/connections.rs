use std::time::Duration;

#[cfg(feature = "mongo")]
use mongodb::bson::doc;
#[cfg(feature = "mongo")]
use mongodb::options::ClientOptions;
#[cfg(feature = "mongo")]
use mongodb::{Client, Database};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub max_pool_size: u32,
}

/// Handle to the blog database.
///
/// Constructed once at process start and shut down explicitly at exit;
/// handlers receive it through the application state rather than through
/// ambient globals.
#[cfg(feature = "mongo")]
pub struct MongoConnection {
    pub client: Client,
    pub db: Database,
}

#[cfg(not(feature = "mongo"))]
pub struct MongoConnection;

#[cfg(feature = "mongo")]
impl MongoConnection {
    /// Initialize the database connection from configuration.
    ///
    /// Connection establishment and server selection are bounded by
    /// client-level timeouts, so an unreachable store fails fast instead
    /// of hanging a request indefinitely.
    pub async fn init(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(Duration::from_secs(10));
        options.server_selection_timeout = Some(Duration::from_secs(10));

        let client = Client::with_options(options)?;
        let db = client.database(&config.database);

        // Round-trip once so a bad URI surfaces at startup, not on the
        // first request.
        db.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            "Database '{}' connected (pool: {})",
            config.database,
            config.max_pool_size
        );

        Ok(Self { client, db })
    }

    /// Tear down the connection, draining in-flight operations.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("Database connection closed");
    }
}
