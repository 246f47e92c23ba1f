use std::borrow::Cow;

use validator::ValidationError;

use crate::entities::patch::Patch;

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(new_validation_error("title_empty", "Title cannot be empty"));
    }
    if title.trim().len() != title.len() {
        return Err(new_validation_error(
            "title_whitespace",
            "Title must not have leading or trailing whitespace",
        ));
    }
    Ok(())
}

pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(new_validation_error("slug_empty", "Slug cannot be empty"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(new_validation_error(
            "slug_invalid_chars",
            "Slug must contain only lowercase letters, digits, or hyphens",
        ));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(new_validation_error(
            "slug_edge_hyphen",
            "Slug must not start or end with a hyphen",
        ));
    }
    if slug.contains("--") {
        return Err(new_validation_error(
            "slug_double_hyphen",
            "Slug must not contain consecutive hyphens",
        ));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(new_validation_error(
            "invalid_url_scheme",
            "URL must start with http:// or https://",
        )),
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_patch_title(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(title) => validate_title(title),
        Patch::Null => Err(new_validation_error(
            "title_null",
            "Title cannot be set to null",
        )),
        Patch::Unchanged => Ok(()),
    }
}

pub fn validate_patch_slug(value: &Patch<String>) -> Result<(), ValidationError> {
    match value {
        Patch::Value(slug) => validate_slug(slug),
        Patch::Null => Err(new_validation_error(
            "slug_null",
            "Slug cannot be set to null",
        )),
        Patch::Unchanged => Ok(()),
    }
}

pub fn validate_patch_url(value: &Patch<String>) -> Result<(), ValidationError> {
    if let Patch::Value(url) = value {
        validate_url(url)?;
    }
    Ok(())
}

/// Resolve the slug for a create request: an explicit slug wins, otherwise
/// one is generated from the title. The result is validated either way.
pub fn resolve_new_slug(explicit: Option<String>, title: &str) -> Result<String, ValidationError> {
    let slug = match explicit {
        Some(s) if !s.trim().is_empty() => s,
        _ => slug::slugify(title),
    };
    validate_slug(&slug)?;
    Ok(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_rules() {
        assert!(validate_slug("hello-world-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Hello").is_err());
        assert!(validate_slug("-edge").is_err());
        assert!(validate_slug("double--hyphen").is_err());
    }

    #[test]
    fn slug_is_generated_from_title_when_absent() {
        let slug = resolve_new_slug(None, "My First Project!").unwrap();
        assert_eq!(slug, "my-first-project");
    }

    #[test]
    fn explicit_slug_wins_over_title() {
        let slug = resolve_new_slug(Some("custom-slug".into()), "Ignored Title").unwrap();
        assert_eq!(slug, "custom-slug");
    }

    #[test]
    fn urls_must_be_http() {
        assert!(validate_url("https://example.com/x").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }
}
