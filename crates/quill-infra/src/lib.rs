//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! SeaORM-backed repositories over SQLite, Argon2 password hashing,
//! and JWT-signed session tokens.

pub mod auth;
pub mod database;
