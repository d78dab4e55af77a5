//! SQLite persistence via SeaORM.

mod connection;
pub mod entity;
mod repo;

pub use connection::{DatabaseConfig, connect};
pub use repo::{SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository};

#[cfg(test)]
mod tests;
