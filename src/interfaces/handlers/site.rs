use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn get_site_settings(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let settings = state.media_handler.get_settings().await?;
    Ok(HttpResponse::Ok().json(settings))
}
