use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    entities::{
        patch::Patch,
        validation::{
            new_validation_error, resolve_new_slug, validate_patch_slug, validate_patch_title,
            validate_patch_url, validate_title, validate_url,
        },
    },
    utils::markdown::safe_markdown_to_html,
};

const MAX_TITLE_LENGTH: u64 = 120;
const MIN_EXCERPT_LENGTH: u64 = 10;
const MAX_EXCERPT_LENGTH: u64 = 300;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewBlogPostRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    pub slug: Option<String>,

    #[validate(length(min = MIN_EXCERPT_LENGTH, max = MAX_EXCERPT_LENGTH))]
    pub excerpt: String,

    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content_markdown: String,

    #[validate(custom(function = "validate_url"))]
    pub cover_image_url: Option<String>,
}

#[derive(Debug)]
pub struct BlogPostInsert {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub cover_image_url: Option<String>,
}

impl TryFrom<NewBlogPostRequest> for BlogPostInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewBlogPostRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let slug = resolve_new_slug(value.slug, &value.title).map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("slug", e);
            errors
        })?;

        Ok(BlogPostInsert {
            title: value.title,
            slug,
            excerpt: value.excerpt,
            content_markdown: value.content_markdown,
            cover_image_url: value.cover_image_url,
        })
    }
}

/// Readers hold permalinks by slug, so the slug never changes unless the
/// admin sends one explicitly.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateBlogPostRequest {
    #[validate(custom(function = "validate_patch_title"))]
    pub title: Patch<String>,

    #[validate(custom(function = "validate_patch_slug"))]
    pub slug: Patch<String>,

    #[validate(custom(function = "validate_patch_excerpt"))]
    pub excerpt: Patch<String>,

    #[validate(custom(function = "validate_patch_content"))]
    pub content_markdown: Patch<String>,

    #[validate(custom(function = "validate_patch_url"))]
    pub cover_image_url: Patch<String>,
}

impl UpdateBlogPostRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_unchanged()
            && self.slug.is_unchanged()
            && self.excerpt.is_unchanged()
            && self.content_markdown.is_unchanged()
            && self.cover_image_url.is_unchanged()
    }
}

fn validate_patch_excerpt(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(e)
            if (e.len() as u64) < MIN_EXCERPT_LENGTH || (e.len() as u64) > MAX_EXCERPT_LENGTH =>
        {
            Err(new_validation_error(
                "invalid_excerpt",
                "Excerpt length is out of range",
            ))
        }
        Patch::Null => Err(new_validation_error(
            "excerpt_null",
            "Excerpt cannot be set to null",
        )),
        _ => Ok(()),
    }
}

fn validate_patch_content(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(c) if c.is_empty() => {
            Err(new_validation_error("content_empty", "Content cannot be empty"))
        }
        Patch::Null => Err(new_validation_error(
            "content_null",
            "Content cannot be set to null",
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Serialize)]
pub struct BlogPostListItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostDetail {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content_markdown: String,
    pub content_html: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn to_list_item(&self) -> BlogPostListItem {
        BlogPostListItem {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            cover_image_url: self.cover_image_url.clone(),
            published_at: self.published_at,
        }
    }

    pub fn to_detail(&self) -> BlogPostDetail {
        BlogPostDetail {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content_markdown: self.content_markdown.clone(),
            content_html: safe_markdown_to_html(&self.content_markdown),
            cover_image_url: self.cover_image_url.clone(),
            published_at: self.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_request() -> NewBlogPostRequest {
        NewBlogPostRequest {
            title: "Shipping a Side Project".into(),
            slug: None,
            excerpt: "Notes from shipping a side project end to end.".into(),
            content_markdown: "## Start small\n\nShip the boring version first.".into(),
            cover_image_url: None,
        }
    }

    #[test]
    fn insert_generates_slug() {
        let insert = BlogPostInsert::try_from(new_request()).unwrap();
        assert_eq!(insert.slug, "shipping-a-side-project");
    }

    #[test]
    fn short_excerpt_is_rejected() {
        let mut request = new_request();
        request.excerpt = "too short".into();
        assert!(BlogPostInsert::try_from(request).is_err());
    }

    #[test]
    fn detail_renders_markdown_as_html() {
        let post = BlogPost {
            id: Uuid::new_v4(),
            title: "T".into(),
            slug: "t".into(),
            excerpt: "E".into(),
            content_markdown: "**bold** text".into(),
            cover_image_url: None,
            published_at: Utc::now(),
        };
        let detail = post.to_detail();
        assert!(detail.content_html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn update_with_only_title_keeps_slug_unchanged() {
        let update: UpdateBlogPostRequest =
            serde_json::from_str(r#"{"title": "New Title"}"#).unwrap();
        update.validate().unwrap();
        assert!(update.slug.is_unchanged());
    }
}
