//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use quill_core::ports::{
    CommentRepository, PasswordService, PostRepository, SessionService, UserRepository,
};
use quill_infra::auth::{Argon2PasswordService, JwtSessionService};
use quill_infra::database::{SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository};

/// Shared application state: the three repositories plus the password
/// and session services, all behind trait objects.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionService>,
}

impl AppState {
    /// Build the application state over an open database connection.
    pub fn new(db: DbConn, sessions: JwtSessionService) -> Self {
        Self {
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            posts: Arc::new(SeaOrmPostRepository::new(db.clone())),
            comments: Arc::new(SeaOrmCommentRepository::new(db)),
            passwords: Arc::new(Argon2PasswordService::new()),
            sessions: Arc::new(sessions),
        }
    }
}
