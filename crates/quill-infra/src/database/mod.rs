//! Database-backed and in-memory repository implementations.

mod connections;
mod memory;
mod postgres_base;

pub mod entity;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, connect};
pub use memory::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository, MemoryStore,
};
pub use postgres_repo::{
    PostgresCommentRepository, PostgresPostRepository, PostgresUserRepository,
};

#[cfg(test)]
mod tests;
