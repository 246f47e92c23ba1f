use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::entities::{
    patch::Patch,
    validation::{
        new_validation_error, resolve_new_slug, validate_patch_slug, validate_patch_title,
        validate_patch_url, validate_title, validate_url,
    },
};

const MAX_TITLE_LENGTH: u64 = 120;
const MAX_DESCRIPTION_LENGTH: u64 = 2000;
const MAX_TECH_ITEMS: usize = 20;
const MAX_TECH_ITEM_LENGTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_category", rename_all = "kebab-case")]
pub enum ProjectCategory {
    #[serde(rename = "Full Stack")]
    FullStack,
    Frontend,
    Backend,
    Mobile,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: ProjectCategory,
    pub tech: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewProjectRequest {
    #[validate(
        length(min = 1, max = MAX_TITLE_LENGTH),
        custom(function = "validate_title")
    )]
    pub title: String,

    /// Optional explicit slug; generated from the title when absent.
    pub slug: Option<String>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub description: String,

    pub category: ProjectCategory,

    #[validate(custom(function = "validate_tech"))]
    pub tech: Vec<String>,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub demo_url: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub repo_url: Option<String>,
}

/// Validated insert payload; ids and timestamps are assigned by the store.
#[derive(Debug)]
pub struct ProjectInsert {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub category: ProjectCategory,
    pub tech: Vec<String>,
    pub image_url: Option<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
}

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        let slug = resolve_new_slug(value.slug, &value.title).map_err(|e| {
            let mut errors = ValidationErrors::new();
            errors.add("slug", e);
            errors
        })?;

        Ok(ProjectInsert {
            title: value.title,
            slug,
            description: value.description,
            category: value.category,
            tech: value.tech,
            image_url: value.image_url,
            demo_url: value.demo_url,
            repo_url: value.repo_url,
        })
    }
}

/// Partial update. The slug only changes when explicitly supplied; editing
/// the title never regenerates it, so published links stay valid.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "validate_patch_title"))]
    pub title: Patch<String>,

    #[validate(custom(function = "validate_patch_slug"))]
    pub slug: Patch<String>,

    #[validate(custom(function = "validate_patch_description"))]
    pub description: Patch<String>,

    #[validate(custom(function = "validate_patch_category"))]
    pub category: Patch<ProjectCategory>,

    #[validate(custom(function = "validate_patch_tech"))]
    pub tech: Patch<Vec<String>>,

    #[validate(custom(function = "validate_patch_url"))]
    pub image_url: Patch<String>,

    #[validate(custom(function = "validate_patch_url"))]
    pub demo_url: Patch<String>,

    #[validate(custom(function = "validate_patch_url"))]
    pub repo_url: Patch<String>,
}

impl UpdateProjectRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_unchanged()
            && self.slug.is_unchanged()
            && self.description.is_unchanged()
            && self.category.is_unchanged()
            && self.tech.is_unchanged()
            && self.image_url.is_unchanged()
            && self.demo_url.is_unchanged()
            && self.repo_url.is_unchanged()
    }
}

pub fn validate_tech(tech: &[String]) -> Result<(), ValidationError> {
    if tech.len() > MAX_TECH_ITEMS {
        return Err(new_validation_error(
            "too_many_tech",
            "Too many technology entries",
        ));
    }
    for item in tech {
        if item.trim().is_empty() || item.len() > MAX_TECH_ITEM_LENGTH {
            return Err(new_validation_error(
                "invalid_tech_entry",
                "Technology entries must be non-empty and short",
            ));
        }
    }
    Ok(())
}

fn validate_patch_description(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(d) if d.trim().is_empty() || d.len() > MAX_DESCRIPTION_LENGTH as usize => Err(
            new_validation_error("invalid_description", "Description length is out of range"),
        ),
        Patch::Null => Err(new_validation_error(
            "description_null",
            "Description cannot be set to null",
        )),
        _ => Ok(()),
    }
}

fn validate_patch_category(value: &Patch<ProjectCategory>) -> Result<(), ValidationError> {
    if value.is_null() {
        return Err(new_validation_error(
            "category_null",
            "Category cannot be set to null",
        ));
    }
    Ok(())
}

fn validate_patch_tech(value: &Patch<Vec<String>>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(tech) => validate_tech(tech),
        Patch::Null => Err(new_validation_error(
            "tech_null",
            "Tech list cannot be set to null",
        )),
        Patch::Unchanged => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_request() -> NewProjectRequest {
        NewProjectRequest {
            title: "Issue Tracker".into(),
            slug: None,
            description: "A small issue tracker".into(),
            category: ProjectCategory::FullStack,
            tech: vec!["Rust".into(), "Postgres".into()],
            image_url: None,
            demo_url: Some("https://tracker.example.com".into()),
            repo_url: Some("https://github.com/example/tracker".into()),
        }
    }

    #[test]
    fn insert_generates_slug_from_title() {
        let insert = ProjectInsert::try_from(new_request()).unwrap();
        assert_eq!(insert.slug, "issue-tracker");
    }

    #[test]
    fn insert_keeps_explicit_slug() {
        let mut request = new_request();
        request.slug = Some("tracker-v2".into());
        let insert = ProjectInsert::try_from(request).unwrap();
        assert_eq!(insert.slug, "tracker-v2");
    }

    #[test]
    fn invalid_demo_url_is_rejected() {
        let mut request = new_request();
        request.demo_url = Some("javascript:alert(1)".into());
        assert!(ProjectInsert::try_from(request).is_err());
    }

    #[test]
    fn update_title_alone_leaves_slug_untouched() {
        let update: UpdateProjectRequest =
            serde_json::from_str(r#"{"title": "Renamed Project"}"#).unwrap();
        update.validate().unwrap();
        assert!(update.slug.is_unchanged());
    }

    #[test]
    fn update_rejects_null_slug() {
        let update: UpdateProjectRequest = serde_json::from_str(r#"{"slug": null}"#).unwrap();
        assert!(update.validate().is_err());
    }

    #[test]
    fn update_allows_clearing_image() {
        let update: UpdateProjectRequest = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        update.validate().unwrap();
        assert!(update.image_url.is_null());
    }

    #[test]
    fn category_serializes_with_display_names() {
        let json = serde_json::to_string(&ProjectCategory::FullStack).unwrap();
        assert_eq!(json, r#""Full Stack""#);
    }
}
