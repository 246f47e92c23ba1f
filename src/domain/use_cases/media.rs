use crate::{
    entities::site_settings::SiteSettings,
    errors::AppError,
    media::store::MediaStore,
    repositories::site_settings::SiteSettingsRepository,
};

const CV_FOLDER: &str = "cv";
const IMAGE_FOLDER: &str = "images";

pub struct MediaHandler<S, R>
where
    S: MediaStore,
    R: SiteSettingsRepository,
{
    pub media_store: S,
    pub settings_repo: R,
}

impl<S, R> MediaHandler<S, R>
where
    S: MediaStore,
    R: SiteSettingsRepository,
{
    pub fn new(media_store: S, settings_repo: R) -> Self {
        MediaHandler {
            media_store,
            settings_repo,
        }
    }

    pub async fn get_settings(&self) -> Result<SiteSettings, AppError> {
        self.settings_repo.get_or_init_settings().await
    }

    /// Upload a CV and persist its URL on the settings row. The upload must
    /// succeed before any database write happens; a crash in between leaves
    /// an unreferenced object behind, which is acceptable.
    pub async fn upload_cv(
        &self,
        data: Vec<u8>,
        file_name: &str,
    ) -> Result<SiteSettings, AppError> {
        require_pdf(&data)?;

        let url = self.media_store.upload(data, file_name, CV_FOLDER).await?;
        self.settings_repo.set_cv_url(&url).await
    }

    /// Upload an image and return its URL. Persisting the URL on the owning
    /// record is the caller's follow-up update.
    pub async fn upload_image(&self, data: Vec<u8>, file_name: &str) -> Result<String, AppError> {
        require_image(&data)?;

        self.media_store.upload(data, file_name, IMAGE_FOLDER).await
    }
}

/// Sniffs the actual bytes; the client's content type is not trusted.
fn require_pdf(data: &[u8]) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::invalid_field("file", "File is empty"));
    }
    match infer::get(data) {
        Some(kind) if kind.mime_type() == "application/pdf" => Ok(()),
        _ => Err(AppError::invalid_field("file", "CV must be a PDF file")),
    }
}

fn require_image(data: &[u8]) -> Result<(), AppError> {
    if data.is_empty() {
        return Err(AppError::invalid_field("file", "File is empty"));
    }
    match infer::get(data) {
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => Ok(()),
        _ => Err(AppError::invalid_field("file", "File must be an image")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0];
    const PDF_HEADER: &[u8] = b"%PDF-1.7 rest of file";

    #[test]
    fn pdf_bytes_pass_the_cv_check() {
        assert!(require_pdf(PDF_HEADER).is_ok());
    }

    #[test]
    fn png_bytes_fail_the_cv_check() {
        assert!(require_pdf(PNG_HEADER).is_err());
    }

    #[test]
    fn png_bytes_pass_the_image_check() {
        assert!(require_image(PNG_HEADER).is_ok());
    }

    #[test]
    fn empty_upload_is_rejected() {
        assert!(require_image(&[]).is_err());
        assert!(require_pdf(&[]).is_err());
    }
}
