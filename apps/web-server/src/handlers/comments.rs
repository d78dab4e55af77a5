//! Commenting on posts.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewComment;
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository};
use quill_shared::dto::CommentForm;

use crate::flash::{self, Flash};
use crate::handlers::see_other;
use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /post/{id} - add a comment to a post.
///
/// Anonymous visitors are sent to the login page with a flash; no
/// comment row is created.
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    identity: OptionalIdentity,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let Some(identity) = identity.0 else {
        return Ok(see_other("/login")
            .cookie(flash::flash_cookie(Flash::LoginRequired))
            .finish());
    };

    let form = form.into_inner();
    if form.text.trim().is_empty() {
        return Err(AppError::BadRequest("Comment text is required".to_string()));
    }

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {} not found", post_id)))?;

    let comment = match state
        .comments
        .insert(NewComment {
            post_id: post.id,
            author_id: identity.user_id,
            text: form.text,
        })
        .await
    {
        Ok(comment) => comment,
        // The post was deleted between the lookup and the insert; the
        // foreign key reports it.
        Err(RepoError::Constraint(_)) => {
            return Err(AppError::NotFound(format!(
                "post with id {} not found",
                post.id
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(
        comment_id = comment.id,
        post_id = post.id,
        author_id = comment.author_id,
        "Comment added"
    );

    Ok(see_other(&format!("/post/{}", post.id)).finish())
}
