use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        blog_post::{BlogPost, BlogPostInsert, UpdateBlogPostRequest},
        patch::Patch,
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxBlogPostRepo,
};

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError>;
    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError>;
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
    async fn update_blog_post(
        &self,
        id: &Uuid,
        patch: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError>;
    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxBlogPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogPostRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some("blog_posts_slug_key") {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl BlogPostRepository for SqlxBlogPostRepo {
    async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError> {
        let posts = sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts ORDER BY published_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(post)
    }

    async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError> {
        let post = sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(post)
    }

    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError> {
        let created = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (title, slug, excerpt, content_markdown, cover_image_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.content_markdown)
        .bind(&post.cover_image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(created)
    }

    async fn update_blog_post(
        &self,
        id: &Uuid,
        patch: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        if patch.is_empty() {
            return self.get_blog_post_by_id(id).await;
        }

        let mut builder = QueryBuilder::new("UPDATE blog_posts SET ");
        let mut updates = builder.separated(", ");

        if let Some(title) = patch.title.value_ref() {
            updates.push("title = ").push_bind_unseparated(title);
        }
        if let Some(slug) = patch.slug.value_ref() {
            updates.push("slug = ").push_bind_unseparated(slug);
        }
        if let Some(excerpt) = patch.excerpt.value_ref() {
            updates.push("excerpt = ").push_bind_unseparated(excerpt);
        }
        if let Some(content) = patch.content_markdown.value_ref() {
            updates
                .push("content_markdown = ")
                .push_bind_unseparated(content);
        }
        match &patch.cover_image_url {
            Patch::Value(url) => {
                updates
                    .push("cover_image_url = ")
                    .push_bind_unseparated(url);
            }
            Patch::Null => {
                updates.push("cover_image_url = NULL");
            }
            Patch::Unchanged => {}
        }

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<BlogPost>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_slug_conflict)?;

        Ok(updated)
    }

    async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Blog post not found".into()));
        }

        Ok(())
    }
}
