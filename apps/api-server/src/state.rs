//! Application state - shared across all handlers.

use std::sync::Arc;

use bloglist_core::ports::BlogRepository;
use bloglist_infra::database::{InMemoryBlogRepository, MongoConfig, MongoConnection};

#[cfg(feature = "mongo")]
use bloglist_infra::database::MongoBlogRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub db: Option<Arc<MongoConnection>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&MongoConfig>) -> Self {
        #[cfg(feature = "mongo")]
        let (db, blogs): (Option<Arc<MongoConnection>>, Arc<dyn BlogRepository>) = {
            if let Some(config) = db_config {
                match MongoConnection::init(config).await {
                    Ok(connection) => {
                        let conn = Arc::new(connection);
                        let repo = Arc::new(MongoBlogRepository::new(&conn.db));
                        (Some(conn), repo)
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryBlogRepository::new()))
                    }
                }
            } else {
                tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryBlogRepository::new()))
            }
        };

        #[cfg(not(feature = "mongo"))]
        let (db, blogs): (Option<Arc<MongoConnection>>, Arc<dyn BlogRepository>) = {
            let _ = db_config;
            tracing::info!("Running without mongo feature - using in-memory repository");
            (None, Arc::new(InMemoryBlogRepository::new()))
        };

        tracing::info!("Application state initialized");

        Self { blogs, db }
    }
}
