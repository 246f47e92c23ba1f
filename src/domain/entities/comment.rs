use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

const MAX_NAME_LENGTH: u64 = 100;
const MAX_CONTENT_LENGTH: u64 = 2000;

/// Blog comment. `post_slug` references the post by value only; deleting a
/// post does not cascade here.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_slug: String,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewCommentRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = MAX_CONTENT_LENGTH))]
    pub content: String,
}

#[derive(Debug)]
pub struct CommentInsert {
    pub post_slug: String,
    pub name: String,
    pub email: String,
    pub content: String,
}

impl CommentInsert {
    pub fn new(post_slug: &str, request: NewCommentRequest) -> Result<Self, validator::ValidationErrors> {
        request.validate()?;
        Ok(CommentInsert {
            post_slug: post_slug.to_string(),
            name: request.name,
            email: request.email,
            content: request.content,
        })
    }
}
