use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::contact::{ContactMessage, ContactMessageInsert},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactMessageRepo,
};

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn create_contact_message(
        &self,
        message: &ContactMessageInsert,
    ) -> Result<ContactMessage, AppError>;
    async fn get_contact_message_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
    async fn count_contact_messages(&self) -> Result<i64, AppError>;
    async fn delete_contact_message(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxContactMessageRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactMessageRepo { pool }
    }
}

#[async_trait]
impl ContactMessageRepository for SqlxContactMessageRepo {
    async fn create_contact_message(
        &self,
        message: &ContactMessageInsert,
    ) -> Result<ContactMessage, AppError> {
        let created = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.phone)
        .bind(&message.subject)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_contact_message_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError> {
        let message =
            sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(message)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn count_contact_messages(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn delete_contact_message(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Contact message not found".into()));
        }

        Ok(())
    }
}
