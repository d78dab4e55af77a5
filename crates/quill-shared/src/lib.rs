//! # Quill Shared
//!
//! Request and response types shared between the server and any
//! client consuming it.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
