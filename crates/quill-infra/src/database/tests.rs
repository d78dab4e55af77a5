use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use quill_core::domain::NewComment;
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::{comment, post, user};
use super::repo::{SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository};

fn sample_post(id: i32) -> post::Model {
    post::Model {
        id,
        author_id: 1,
        title: format!("Post {id}"),
        subtitle: "A subtitle".to_owned(),
        date: "June 21, 2024".to_owned(),
        body: "Body text".to_owned(),
        img_url: "https://example.com/cover.jpg".to_owned(),
    }
}

#[tokio::test]
async fn find_post_by_id_maps_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![sample_post(3)]])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    let found = repo.find_by_id(3).await.unwrap().unwrap();
    assert_eq!(found.id, 3);
    assert_eq!(found.title, "Post 3");
    assert_eq!(found.date, "June 21, 2024");
}

#[tokio::test]
async fn find_post_by_missing_id_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert!(repo.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = SeaOrmPostRepository::new(db);

    assert!(matches!(repo.delete(42).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn find_user_by_email_maps_to_domain() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results(vec![vec![user::Model {
            id: 1,
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password_hash: "$argon2id$...".to_owned(),
            is_admin: true,
        }]])
        .into_connection();

    let repo = SeaOrmUserRepository::new(db);

    let found = repo.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(found.id, 1);
    assert!(found.is_admin);
}

#[tokio::test]
async fn insert_comment_returns_assigned_id() {
    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 7,
            rows_affected: 1,
        }])
        .append_query_results(vec![vec![comment::Model {
            id: 7,
            post_id: 2,
            author_id: 3,
            text: "Nice post".to_owned(),
        }]])
        .into_connection();

    let repo = SeaOrmCommentRepository::new(db);

    let saved = repo
        .insert(NewComment {
            post_id: 2,
            author_id: 3,
            text: "Nice post".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(saved.id, 7);
    assert_eq!(saved.post_id, 2);
}
