use async_trait::async_trait;

use crate::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// User repository. Users are inserted by registration and looked up
/// for login and session resolution; no exposed operation updates or
/// deletes them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address (emails are unique).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user; the store assigns the id. A duplicate email
    /// surfaces as [`RepoError::Constraint`].
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    /// Whether any admin account exists yet. The first registration
    /// while this is false becomes the admin.
    async fn admin_exists(&self) -> Result<bool, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in id (insertion) order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Find a post by its title (titles are unique).
    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a new post; a duplicate title surfaces as
    /// [`RepoError::Constraint`].
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Update an existing post in place. [`RepoError::NotFound`] if
    /// the id does not resolve.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by id; its comments go with it.
    /// [`RepoError::NotFound`] if the id does not resolve.
    async fn delete(&self, id: i32) -> Result<(), RepoError>;
}

/// Comment repository. Comments are only ever created and listed.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment; the store assigns the id.
    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// All comments on a post, in id (insertion) order.
    async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;
}
