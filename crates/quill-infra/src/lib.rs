//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! Postgres repositories via SeaORM, in-memory fallbacks for running
//! without a database, and the JWT/Argon2 authentication services.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtSessionService, SessionConfig};
pub use database::{
    DatabaseConfig, InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
    MemoryStore, PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
    connect,
};
