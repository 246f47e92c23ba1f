use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::site_settings::{SiteSettings, SITE_SETTINGS_ID},
    errors::AppError,
    repositories::sqlx_repo::SqlxSiteSettingsRepo,
};

#[async_trait]
pub trait SiteSettingsRepository: Send + Sync {
    /// Reads the singleton row, materializing it on first access.
    async fn get_or_init_settings(&self) -> Result<SiteSettings, AppError>;
    async fn set_cv_url(&self, cv_url: &str) -> Result<SiteSettings, AppError>;
}

impl SqlxSiteSettingsRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSiteSettingsRepo { pool }
    }
}

#[async_trait]
impl SiteSettingsRepository for SqlxSiteSettingsRepo {
    async fn get_or_init_settings(&self) -> Result<SiteSettings, AppError> {
        sqlx::query("INSERT INTO site_settings (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(SITE_SETTINGS_ID)
            .execute(&self.pool)
            .await?;

        let settings =
            sqlx::query_as::<_, SiteSettings>("SELECT * FROM site_settings WHERE id = $1")
                .bind(SITE_SETTINGS_ID)
                .fetch_one(&self.pool)
                .await?;

        Ok(settings)
    }

    async fn set_cv_url(&self, cv_url: &str) -> Result<SiteSettings, AppError> {
        let settings = sqlx::query_as::<_, SiteSettings>(
            r#"
            INSERT INTO site_settings (id, cv_url, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (id) DO UPDATE SET cv_url = EXCLUDED.cv_url, updated_at = now()
            RETURNING *
            "#,
        )
        .bind(SITE_SETTINGS_ID)
        .bind(cv_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
