use chrono::{DateTime, Utc};
use serde::Serialize;

/// Singleton settings row, fixed id 1. Materialized lazily on first read.
pub const SITE_SETTINGS_ID: i32 = 1;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SiteSettings {
    pub id: i32,
    pub cv_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}
