use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::TryStreamExt;
use tracing::instrument;

use crate::{
    constants::MAX_UPLOAD_BYTES, errors::AppError, use_cases::extractors::AdminSession, AppState,
};

/// Pulls the first file field out of a multipart payload, bounded in size.
async fn read_upload(payload: &mut Multipart) -> Result<(String, Vec<u8>), AppError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::invalid_field("file", &format!("Malformed upload: {e}")))?
    {
        let Some(file_name) = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned)
        else {
            continue;
        };

        let mut data = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::invalid_field("file", &format!("Malformed upload: {e}")))?
        {
            if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(AppError::invalid_field("file", "File is too large"));
            }
            data.extend_from_slice(&chunk);
        }

        return Ok((file_name, data));
    }

    Err(AppError::invalid_field("file", "No file provided"))
}

/// Uploads a CV (PDF) and persists its URL on the settings row.
#[instrument(skip(_admin, state, payload))]
pub async fn upload_cv(
    _admin: AdminSession,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<impl Responder, AppError> {
    let (file_name, data) = read_upload(&mut payload).await?;
    let settings = state.media_handler.upload_cv(data, &file_name).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "cv_url": settings.cv_url,
    })))
}

/// Uploads an image and returns its URL; the caller attaches it to the
/// owning record with a follow-up update.
#[instrument(skip(_admin, state, payload))]
pub async fn upload_image(
    _admin: AdminSession,
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<impl Responder, AppError> {
    let (file_name, data) = read_upload(&mut payload).await?;
    let url = state.media_handler.upload_image(data, &file_name).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "url": url,
    })))
}
