//! In-memory repositories - used as fallback when Postgres is unavailable.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Comment, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{
    BaseRepository, CommentRepository, PostRepository, UserRepository,
};

#[derive(Default)]
struct Tables {
    posts: HashMap<i64, Post>,
    comments: HashMap<i64, Comment>,
    users: HashMap<i64, User>,
    next_id: i64,
}

impl Tables {
    fn assign_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory table set.
///
/// All repositories created from one store see the same data, so foreign key
/// checks and delete cascades behave like their SQL counterparts.
/// Note: Data is lost on process restart.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            tables: RwLock::new(Tables::default()),
        })
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryPostRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.users.contains_key(&entity.author_id) {
            return Err(RepoError::Constraint(
                "posts.author_id references a missing user".to_string(),
            ));
        }
        if entity.id == 0 {
            entity.id = tables.assign_id();
        } else if !tables.posts.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        tables.posts.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        tables.comments.retain(|_, c| c.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_published(&self) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|p| !p.is_draft())
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.published_date.cmp(&a.published_date));
        Ok(posts)
    }

    async fn list_drafts(&self) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        let mut posts: Vec<Post> = tables
            .posts
            .values()
            .filter(|p| p.is_draft())
            .cloned()
            .collect();
        posts.sort_by(|a, b| a.created_date.cmp(&b.created_date));
        Ok(posts)
    }
}

/// In-memory comment repository.
pub struct InMemoryCommentRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCommentRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Comment, i64> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn save(&self, mut entity: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !tables.posts.contains_key(&entity.post_id) {
            return Err(RepoError::Constraint(
                "comments.post_id references a missing post".to_string(),
            ));
        }
        if entity.id == 0 {
            entity.id = tables.assign_id();
        } else if !tables.comments.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        tables.comments.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.comments.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_post(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_date.cmp(&b.created_date));
        Ok(comments)
    }
}

/// In-memory user repository.
pub struct InMemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn save(&self, mut entity: User) -> Result<User, RepoError> {
        let mut tables = self.store.tables.write().await;
        let taken = tables
            .users
            .values()
            .any(|u| u.username == entity.username && u.id != entity.id);
        if taken {
            return Err(RepoError::Constraint(
                "users.username must be unique".to_string(),
            ));
        }
        if entity.id == 0 {
            entity.id = tables.assign_id();
        } else if !tables.users.contains_key(&entity.id) {
            return Err(RepoError::NotFound);
        }
        tables.users.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        let post_ids: Vec<i64> = tables
            .posts
            .values()
            .filter(|p| p.author_id == id)
            .map(|p| p.id)
            .collect();
        tables.posts.retain(|_, p| p.author_id != id);
        tables
            .comments
            .retain(|_, c| !post_ids.contains(&c.post_id));
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}
