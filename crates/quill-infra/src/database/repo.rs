//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use quill_core::domain::{Comment, NewComment, NewPost, NewUser, Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// Map a SeaORM error into the repository error space, recognising
/// constraint violations (SQLite reports them as
/// "UNIQUE constraint failed: <table>.<column>" and
/// "FOREIGN KEY constraint failed").
fn map_db_err(e: DbErr) -> RepoError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint")
        || msg.contains("FOREIGN KEY constraint")
        || msg.contains("unique")
        || msg.contains("duplicate")
    {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

/// Mask an email for logging to keep PII out of logs.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) if at_pos > 1 => {
            let (local, domain) = email.split_at(at_pos);
            format!("{}***{}", &local[..1], domain)
        }
        Some(at_pos) => format!("***{}", &email[at_pos..]),
        None => "***".to_string(),
    }
}

/// SQLite-backed user repository.
pub struct SeaOrmUserRepository {
    db: DbConn,
}

impl SeaOrmUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(new_user)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn admin_exists(&self) -> Result<bool, RepoError> {
        let admins = UserEntity::find()
            .filter(user::Column::IsAdmin.eq(true))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(admins > 0)
    }
}

/// SQLite-backed post repository.
pub struct SeaOrmPostRepository {
    db: DbConn,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Title.eq(title))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(new_post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, updated: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(updated)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => RepoError::NotFound,
                other => map_db_err(other),
            })?;

        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// SQLite-backed comment repository.
pub struct SeaOrmCommentRepository {
    db: DbConn,
}

impl SeaOrmCommentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn insert(&self, new_comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(new_comment)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_post(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn unique_violations_become_constraint_errors() {
        let err = DbErr::Custom("UNIQUE constraint failed: users.email".to_string());
        assert!(matches!(map_db_err(err), RepoError::Constraint(_)));

        let err = DbErr::Custom("FOREIGN KEY constraint failed".to_string());
        assert!(matches!(map_db_err(err), RepoError::Constraint(_)));

        let err = DbErr::Custom("no such table: users".to_string());
        assert!(matches!(map_db_err(err), RepoError::Query(_)));
    }

    #[test]
    fn email_masking_keeps_domain_only() {
        assert_eq!(mask_email("ada@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@example.com"), "***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
