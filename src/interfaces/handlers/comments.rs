use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::comment::NewCommentRequest, errors::AppError, use_cases::extractors::AdminSession,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_comments(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let comments = state.comments_handler.list_comments(&slug).await?;
    Ok(HttpResponse::Ok().json(comments))
}

#[instrument(skip(state, data))]
pub async fn create_comment(
    slug: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewCommentRequest>,
) -> Result<impl Responder, AppError> {
    let comment = state
        .comments_handler
        .create_comment(&slug, data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(comment))
}

#[instrument(skip(_admin, state))]
pub async fn admin_delete_comment(
    _admin: AdminSession,
    comment_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.comments_handler.delete_comment(&comment_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
