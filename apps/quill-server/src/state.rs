//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{CommentRepository, PostRepository, UserRepository};
use quill_infra::{
    DatabaseConfig, InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
    MemoryStore, PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        if let Some(config) = db_config {
            match quill_infra::connect(config).await {
                Ok(conn) => {
                    return Self {
                        posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                        comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
                        users: Arc::new(PostgresUserRepository::new(conn)),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        Self::in_memory()
    }

    /// State backed by shared in-memory tables. Also used by handler tests.
    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self {
            posts: Arc::new(InMemoryPostRepository::new(store.clone())),
            comments: Arc::new(InMemoryCommentRepository::new(store.clone())),
            users: Arc::new(InMemoryUserRepository::new(store)),
        }
    }
}
