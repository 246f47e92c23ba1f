use async_trait::async_trait;
use rand::Rng;

use crate::{errors::AppError, settings::AppConfig};

/// Object storage for media assets. Returns a publicly fetchable URL;
/// persisting that URL on the owning record is the caller's separate step.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<String, AppError>;
}

/// HTTP object-storage backend (bucket + bearer key, public read URLs).
pub struct HttpObjectStore {
    client: reqwest::Client,
    api_base: String,
    bucket: String,
    api_key: String,
}

impl HttpObjectStore {
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Upload(format!("storage client init failed: {e}")))?;

        Ok(HttpObjectStore {
            client,
            api_base: config.storage_api_base.trim_end_matches('/').to_string(),
            bucket: config.storage_bucket.clone(),
            api_key: config.storage_api_key.clone(),
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/object/public/{}/{}",
            self.api_base, self.bucket, key
        )
    }
}

#[async_trait]
impl MediaStore for HttpObjectStore {
    async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<String, AppError> {
        let key = storage_key(folder, file_name);

        let response = self
            .client
            .post(format!("{}/object/{}/{}", self.api_base, self.bucket, key))
            .bearer_auth(&self.api_key)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("storage request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Upload(format!(
                "media host returned {status}: {detail}"
            )));
        }

        Ok(self.public_url(&key))
    }
}

/// Unique storage key: millisecond timestamp plus a random suffix, so two
/// uploads of the same file name at the same instant never collide.
pub fn storage_key(folder: &str, file_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u16 = rand::thread_rng().r#gen();
    format!(
        "{}/{}-{:04x}-{}",
        folder,
        millis,
        suffix,
        sanitize_file_name(file_name)
    )
}

fn sanitize_file_name(name: &str) -> String {
    let mut cleaned = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            cleaned.push(c);
        } else if c == '.' && !cleaned.ends_with('.') && !cleaned.is_empty() {
            cleaned.push(c);
        }
    }
    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_name_never_produces_the_same_key() {
        let keys: HashSet<String> = (0..32)
            .map(|_| storage_key("images", "avatar.png"))
            .collect();
        assert_eq!(keys.len(), 32);
    }

    #[test]
    fn keys_keep_folder_and_sanitized_name() {
        let key = storage_key("cv", "my résumé (final).pdf");
        assert!(key.starts_with("cv/"));
        assert!(key.ends_with("myrsumfinal.pdf"));
        assert!(!key.contains(' '));
    }

    #[test]
    fn hostile_names_fall_back_to_a_plain_key() {
        let key = storage_key("images", "../../../../etc/passwd");
        assert!(!key.contains(".."));
        assert!(!key.contains('/') || key.matches('/').count() == 1);
    }
}
