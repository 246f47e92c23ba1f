use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::comment::{Comment, CommentInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxCommentRepo,
};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn list_comments_for_post(&self, post_slug: &str) -> Result<Vec<Comment>, AppError>;
    async fn create_comment(&self, comment: &CommentInsert) -> Result<Comment, AppError>;
    async fn delete_comment(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxCommentRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxCommentRepo { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepo {
    async fn list_comments_for_post(&self, post_slug: &str) -> Result<Vec<Comment>, AppError> {
        let comments = sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE post_slug = $1 ORDER BY created_at DESC",
        )
        .bind(post_slug)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn create_comment(&self, comment: &CommentInsert) -> Result<Comment, AppError> {
        let created = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_slug, name, email, content)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&comment.post_slug)
        .bind(&comment.name)
        .bind(&comment.email)
        .bind(&comment.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn delete_comment(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Comment not found".into()));
        }

        Ok(())
    }
}
