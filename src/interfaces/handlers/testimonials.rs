use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::testimonial::{
        AdminNewTestimonialRequest, NewTestimonialRequest, SetApprovalRequest,
        UpdateTestimonialRequest,
    },
    errors::AppError,
    use_cases::extractors::AdminSession,
    AppState,
};

/// Public listing; only approved testimonials are visible here.
#[instrument(skip(state))]
pub async fn list_testimonials(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let testimonials = state.testimonials_handler.list_public_testimonials().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

/// Public submission; lands in the moderation queue unapproved.
#[instrument(skip(state, data))]
pub async fn submit_testimonial(
    state: web::Data<AppState>,
    data: web::Json<NewTestimonialRequest>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonials_handler
        .submit_testimonial(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(testimonial))
}

#[instrument(skip(_admin, state))]
pub async fn admin_list_testimonials(
    _admin: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let testimonials = state.testimonials_handler.list_all_testimonials().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

#[instrument(skip(_admin, state, data))]
pub async fn admin_create_testimonial(
    _admin: AdminSession,
    state: web::Data<AppState>,
    data: web::Json<AdminNewTestimonialRequest>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonials_handler
        .create_testimonial(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(testimonial))
}

#[instrument(skip(_admin, state, data))]
pub async fn admin_update_testimonial(
    _admin: AdminSession,
    testimonial_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateTestimonialRequest>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonials_handler
        .update_testimonial(&testimonial_id, &data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(testimonial))
}

#[instrument(skip(_admin, state, data))]
pub async fn admin_set_approval(
    _admin: AdminSession,
    testimonial_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SetApprovalRequest>,
) -> Result<impl Responder, AppError> {
    let testimonial = state
        .testimonials_handler
        .set_approved(&testimonial_id, data.approved)
        .await?;
    Ok(HttpResponse::Ok().json(testimonial))
}

#[instrument(skip(_admin, state))]
pub async fn admin_delete_testimonial(
    _admin: AdminSession,
    testimonial_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .testimonials_handler
        .delete_testimonial(&testimonial_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
