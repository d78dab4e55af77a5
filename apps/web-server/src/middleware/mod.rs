//! Request-level plumbing: session extractors and error responses.

pub mod auth;
pub mod error;
