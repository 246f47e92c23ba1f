use serde::{Deserialize, Deserializer, Serialize};

/// Tri-state field for PATCH-style updates.
///
/// - `Unchanged` → field absent from the request body
/// - `Null` → explicit `null`, clears a nullable column
/// - `Value` → set to the provided value
///
/// Fields not present in an update are left untouched; a column is only
/// nulled when the caller sends an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Patch<T> {
    Unchanged,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    // Relies on #[serde(default)] at the struct level: an absent field
    // never reaches this impl, so `null` and value are all we see here.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => Patch::Null,
            Some(value) => Patch::Value(value),
        })
    }
}

impl<T> Patch<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Patch::Unchanged)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    /// Reference to the inner value when `Value`.
    pub fn value_ref(&self) -> Option<&T> {
        if let Patch::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

}

impl Patch<String> {
    pub fn as_str(&self) -> Option<&str> {
        self.value_ref().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    struct Body {
        title: Patch<String>,
        image_url: Patch<String>,
    }

    #[test]
    fn absent_field_is_unchanged() {
        let body: Body = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(body.title, Patch::Value("New".to_string()));
        assert!(body.image_url.is_unchanged());
    }

    #[test]
    fn explicit_null_clears() {
        let body: Body = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        assert!(body.image_url.is_null());
        assert!(body.title.is_unchanged());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<Body>(r#"{"titel": "typo"}"#);
        assert!(result.is_err());
    }
}
