//! # Quill Web Server
//!
//! The Actix-web application: configuration, shared state, session
//! extractors, and the blog's HTTP handlers. `main.rs` wires this
//! into a running server; integration tests drive it in-process.

pub mod config;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod state;
