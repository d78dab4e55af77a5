//! Data Transfer Objects - form payloads and page responses.

use serde::{Deserialize, Serialize};

/// Registration form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Create/edit post form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub img_url: String,
}

/// Comment form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentForm {
    pub text: String,
}

/// One post as it appears on the index page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub img_url: String,
    pub author: String,
}

/// A full post with its comments, as shown on the post page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPage {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
    pub author: String,
    pub comments: Vec<CommentView>,
}

/// One comment on a post page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: i32,
    pub text: String,
    pub author: String,
}

/// A form page (login/register) with any pending flash message.
#[derive(Debug, Clone, Serialize)]
pub struct FormPage {
    pub page: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<String>,
}

/// A static informational page (about/contact).
#[derive(Debug, Clone, Serialize)]
pub struct StaticPage {
    pub page: &'static str,
    pub content: &'static str,
}
