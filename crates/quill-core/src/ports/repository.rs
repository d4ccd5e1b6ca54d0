use async_trait::async_trait;

use crate::domain::{Comment, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `save` inserts when the entity id is 0 (not yet assigned) and updates
/// otherwise; updating a missing row is `RepoError::NotFound`.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (insert or update), returning it with its assigned id.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with the blog's filtered listings.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Published posts only, newest publication first.
    async fn list_published(&self) -> Result<Vec<Post>, RepoError>;

    /// Drafts (no publication date), oldest creation first.
    async fn list_drafts(&self) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, i64> {
    /// Comments belonging to one post, oldest first.
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}
