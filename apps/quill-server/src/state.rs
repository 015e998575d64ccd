//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;
use quill_infra::database::DatabaseConfig;

#[cfg(feature = "postgres")]
use quill_infra::{DatabaseConnections, PostgresPostRepository};

/// Which adapter backs the post collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    #[cfg(feature = "postgres")]
    Postgres,
    Memory,
}

impl Storage {
    pub fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "postgres")]
            Storage::Postgres => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (repo, storage): (Arc<dyn PostRepository>, Storage) = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => (
                        Arc::new(PostgresPostRepository::new(connections.main)),
                        Storage::Postgres,
                    ),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), Storage::Memory)
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), Storage::Memory)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repo, storage): (Arc<dyn PostRepository>, Storage) = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored - built without postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Arc::new(InMemoryPostRepository::new()), Storage::Memory)
        };

        tracing::info!(storage = storage.as_str(), "Application state initialized");

        Self {
            posts: PostService::new(repo),
            storage,
        }
    }

    /// State backed by a fresh in-memory repository.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
            storage: Storage::Memory,
        }
    }
}
