use serde::{Deserialize, Serialize};

/// Post entity - a published article.
///
/// `date` is a display string ("June 21, 2024") stamped when the post
/// is created and preserved verbatim on every edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
}

/// A post about to be inserted.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: i32,
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub img_url: String,
}

impl Post {
    /// Format today's local date the way posts display it, e.g.
    /// "June 21, 2024".
    pub fn date_stamp() -> String {
        chrono::Local::now().format("%B %d, %Y").to_string()
    }
}
