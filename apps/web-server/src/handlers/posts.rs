//! Post listing and admin-only post management.

use actix_web::{HttpResponse, web};

use quill_core::domain::{NewPost, Post};
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};
use quill_shared::dto::{CommentView, FormPage, PostForm, PostPage, PostSummary};

use crate::handlers::see_other;
use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("post with id {} not found", id))
}

async fn author_name(state: &AppState, author_id: i32) -> AppResult<String> {
    // Authors are delete-restricted, so a dangling id would be a bug;
    // degrade to a placeholder rather than a 500 if it ever happens.
    Ok(state
        .users
        .find_by_id(author_id)
        .await?
        .map(|u| u.name)
        .unwrap_or_else(|| "unknown".to_string()))
}

fn validate_post_form(form: &PostForm) -> AppResult<()> {
    if form.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }
    if form.subtitle.trim().is_empty() {
        return Err(AppError::BadRequest("Subtitle is required".to_string()));
    }
    if form.body.trim().is_empty() {
        return Err(AppError::BadRequest("Body is required".to_string()));
    }
    if form.img_url.trim().is_empty() {
        return Err(AppError::BadRequest("Image URL is required".to_string()));
    }
    Ok(())
}

/// GET / - all posts in insertion order.
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    let mut summaries = Vec::with_capacity(posts.len());
    for post in posts {
        let author = author_name(&state, post.author_id).await?;
        summaries.push(PostSummary {
            id: post.id,
            title: post.title,
            subtitle: post.subtitle,
            date: post.date,
            img_url: post.img_url,
            author,
        });
    }

    Ok(HttpResponse::Ok().json(summaries))
}

/// GET /post/{id} - one post with its comments.
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    let author = author_name(&state, post.author_id).await?;

    let mut comments = Vec::new();
    for comment in state.comments.find_by_post(post.id).await? {
        let comment_author = author_name(&state, comment.author_id).await?;
        comments.push(CommentView {
            id: comment.id,
            text: comment.text,
            author: comment_author,
        });
    }

    Ok(HttpResponse::Ok().json(PostPage {
        id: post.id,
        title: post.title,
        subtitle: post.subtitle,
        date: post.date,
        body: post.body,
        img_url: post.img_url,
        author,
        comments,
    }))
}

/// GET /new-post (admin only)
pub async fn new_post_page(_admin: AdminIdentity) -> HttpResponse {
    HttpResponse::Ok().json(FormPage {
        page: "new-post",
        flash: None,
    })
}

/// POST /new-post (admin only)
pub async fn create(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    validate_post_form(&form)?;

    if state.posts.find_by_title(&form.title).await?.is_some() {
        return Err(AppError::Validation(
            "A post with this title already exists".to_string(),
        ));
    }

    let post = state
        .posts
        .insert(NewPost {
            author_id: admin.0.user_id,
            title: form.title,
            subtitle: form.subtitle,
            date: Post::date_stamp(),
            body: form.body,
            img_url: form.img_url,
        })
        .await?;

    tracing::info!(post_id = post.id, "Post created");

    Ok(see_other("/").finish())
}

/// GET /edit-post/{id} (admin only) - current fields for the form.
pub async fn edit_page(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    Ok(HttpResponse::Ok().json(PostForm {
        title: post.title,
        subtitle: post.subtitle,
        body: post.body,
        img_url: post.img_url,
    }))
}

/// POST /edit-post/{id} (admin only)
pub async fn update(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = form.into_inner();
    validate_post_form(&form)?;

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    if form.title != existing.title && state.posts.find_by_title(&form.title).await?.is_some() {
        return Err(AppError::Validation(
            "A post with this title already exists".to_string(),
        ));
    }

    let updated = state
        .posts
        .update(Post {
            id: existing.id,
            author_id: existing.author_id,
            title: form.title,
            subtitle: form.subtitle,
            // The publish date is deliberately preserved on edit.
            date: existing.date,
            body: form.body,
            img_url: form.img_url,
        })
        .await?;

    tracing::info!(post_id = updated.id, "Post updated");

    Ok(see_other(&format!("/post/{}", updated.id)).finish())
}

/// GET /delete/{id} (admin only)
pub async fn delete(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => {}
        Err(quill_core::error::RepoError::NotFound) => return Err(post_not_found(id)),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(post_id = id, "Post deleted");

    Ok(see_other("/").finish())
}
