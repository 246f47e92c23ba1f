use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    constants::MAX_TESTIMONIAL_CONTENT_LENGTH,
    entities::{
        patch::Patch,
        validation::{new_validation_error, validate_patch_url, validate_url},
    },
};

const MAX_NAME_LENGTH: u64 = 100;
const MAX_ROLE_LENGTH: u64 = 100;
const MAX_COMPANY_LENGTH: u64 = 100;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub content: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Public submission form. The approval flag is not part of the payload;
/// submissions always enter the moderation queue unapproved.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewTestimonialRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_ROLE_LENGTH))]
    pub role: String,

    #[validate(length(min = 1, max = MAX_COMPANY_LENGTH))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = MAX_TESTIMONIAL_CONTENT_LENGTH))]
    pub content: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,
}

/// Admin creation form; admins may create a testimonial pre-approved.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AdminNewTestimonialRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(length(min = 1, max = MAX_ROLE_LENGTH))]
    pub role: String,

    #[validate(length(min = 1, max = MAX_COMPANY_LENGTH))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = MAX_TESTIMONIAL_CONTENT_LENGTH))]
    pub content: String,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(custom(function = "validate_url"))]
    pub image_url: Option<String>,

    #[serde(default)]
    pub approved: bool,
}

#[derive(Debug)]
pub struct TestimonialInsert {
    pub name: String,
    pub role: String,
    pub company: Option<String>,
    pub content: String,
    pub rating: i32,
    pub image_url: Option<String>,
    pub approved: bool,
}

impl TestimonialInsert {
    /// Public path: the request's contents with approval forced off.
    pub fn from_public(request: NewTestimonialRequest) -> Result<Self, ValidationErrors> {
        request.validate()?;
        Ok(TestimonialInsert {
            name: request.name,
            role: request.role,
            company: request.company,
            content: request.content,
            rating: request.rating,
            image_url: request.image_url,
            approved: false,
        })
    }

    pub fn from_admin(request: AdminNewTestimonialRequest) -> Result<Self, ValidationErrors> {
        request.validate()?;
        Ok(TestimonialInsert {
            name: request.name,
            role: request.role,
            company: request.company,
            content: request.content,
            rating: request.rating,
            image_url: request.image_url,
            approved: request.approved,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateTestimonialRequest {
    #[validate(custom(function = "validate_patch_name"))]
    pub name: Patch<String>,

    #[validate(custom(function = "validate_patch_role"))]
    pub role: Patch<String>,

    #[validate(custom(function = "validate_patch_company"))]
    pub company: Patch<String>,

    #[validate(custom(function = "validate_patch_content"))]
    pub content: Patch<String>,

    #[validate(custom(function = "validate_patch_rating"))]
    pub rating: Patch<i32>,

    #[validate(custom(function = "validate_patch_url"))]
    pub image_url: Patch<String>,
}

impl UpdateTestimonialRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.role.is_unchanged()
            && self.company.is_unchanged()
            && self.content.is_unchanged()
            && self.rating.is_unchanged()
            && self.image_url.is_unchanged()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetApprovalRequest {
    pub approved: bool,
}

fn validate_patch_name(value: &Patch<String>) -> Result<(), ValidationError> {
    non_nullable_bounded(value, MAX_NAME_LENGTH)
}

fn validate_patch_role(value: &Patch<String>) -> Result<(), ValidationError> {
    non_nullable_bounded(value, MAX_ROLE_LENGTH)
}

fn validate_patch_company(value: &Patch<String>) -> Result<(), ValidationError> {
    // Company is nullable; only bound the length when a value is present.
    if let Patch::Value(company) = value {
        if company.trim().is_empty() || company.len() > MAX_COMPANY_LENGTH as usize {
            return Err(new_validation_error(
                "invalid_company",
                "Company length is out of range",
            ));
        }
    }
    Ok(())
}

fn validate_patch_content(value: &Patch<String>) -> Result<(), ValidationError> {
    non_nullable_bounded(value, MAX_TESTIMONIAL_CONTENT_LENGTH)
}

fn validate_patch_rating(value: &Patch<i32>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(rating) if !(1..=5).contains(rating) => Err(new_validation_error(
            "invalid_rating",
            "Rating must be between 1 and 5",
        )),
        Patch::Null => Err(new_validation_error(
            "rating_null",
            "Rating cannot be set to null",
        )),
        _ => Ok(()),
    }
}

fn non_nullable_bounded(value: &Patch<String>, max: u64) -> Result<(), ValidationError> {
    match value {
        Patch::Value(v) if v.trim().is_empty() || v.len() > max as usize => Err(
            new_validation_error("invalid_length", "Field length is out of range"),
        ),
        Patch::Null => Err(new_validation_error(
            "field_null",
            "Field cannot be set to null",
        )),
        _ => Ok(()),
    }
}
