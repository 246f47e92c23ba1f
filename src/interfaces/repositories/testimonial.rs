use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        patch::Patch,
        testimonial::{Testimonial, TestimonialInsert, UpdateTestimonialRequest},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxTestimonialRepo,
};

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// `approved_only` is the public/admin split: public listings must pass
    /// `true` so unapproved rows never leave the store.
    async fn list_testimonials(&self, approved_only: bool) -> Result<Vec<Testimonial>, AppError>;
    async fn get_testimonial_by_id(&self, id: &Uuid) -> Result<Testimonial, AppError>;
    async fn create_testimonial(&self, testimonial: &TestimonialInsert)
        -> Result<Testimonial, AppError>;
    async fn update_testimonial(
        &self,
        id: &Uuid,
        patch: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, AppError>;
    async fn set_testimonial_approved(
        &self,
        id: &Uuid,
        approved: bool,
    ) -> Result<Testimonial, AppError>;
    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxTestimonialRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxTestimonialRepo { pool }
    }
}

#[async_trait]
impl TestimonialRepository for SqlxTestimonialRepo {
    async fn list_testimonials(&self, approved_only: bool) -> Result<Vec<Testimonial>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM testimonials");

        if approved_only {
            builder.push(" WHERE approved = TRUE");
        }
        builder.push(" ORDER BY created_at DESC");

        let testimonials = builder
            .build_query_as::<Testimonial>()
            .fetch_all(&self.pool)
            .await?;

        Ok(testimonials)
    }

    async fn get_testimonial_by_id(&self, id: &Uuid) -> Result<Testimonial, AppError> {
        let testimonial =
            sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(testimonial)
    }

    async fn create_testimonial(
        &self,
        testimonial: &TestimonialInsert,
    ) -> Result<Testimonial, AppError> {
        let created = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (name, role, company, content, rating, image_url, approved)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&testimonial.name)
        .bind(&testimonial.role)
        .bind(&testimonial.company)
        .bind(&testimonial.content)
        .bind(testimonial.rating)
        .bind(&testimonial.image_url)
        .bind(testimonial.approved)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_testimonial(
        &self,
        id: &Uuid,
        patch: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        if patch.is_empty() {
            return self.get_testimonial_by_id(id).await;
        }

        let mut builder = QueryBuilder::new("UPDATE testimonials SET ");
        let mut updates = builder.separated(", ");

        if let Some(name) = patch.name.value_ref() {
            updates.push("name = ").push_bind_unseparated(name);
        }
        if let Some(role) = patch.role.value_ref() {
            updates.push("role = ").push_bind_unseparated(role);
        }
        match &patch.company {
            Patch::Value(company) => {
                updates.push("company = ").push_bind_unseparated(company);
            }
            Patch::Null => {
                updates.push("company = NULL");
            }
            Patch::Unchanged => {}
        }
        if let Some(content) = patch.content.value_ref() {
            updates.push("content = ").push_bind_unseparated(content);
        }
        if let Some(rating) = patch.rating.value_ref() {
            updates.push("rating = ").push_bind_unseparated(*rating);
        }
        match &patch.image_url {
            Patch::Value(url) => {
                updates.push("image_url = ").push_bind_unseparated(url);
            }
            Patch::Null => {
                updates.push("image_url = NULL");
            }
            Patch::Unchanged => {}
        }

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Testimonial>()
            .fetch_one(&self.pool)
            .await?;

        Ok(updated)
    }

    async fn set_testimonial_approved(
        &self,
        id: &Uuid,
        approved: bool,
    ) -> Result<Testimonial, AppError> {
        // Setting the current value again is a plain no-op update
        let updated = sqlx::query_as::<_, Testimonial>(
            "UPDATE testimonials SET approved = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(approved)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_testimonial(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Testimonial not found".into()));
        }

        Ok(())
    }
}
