use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::ContactForm, errors::AppError, use_cases::extractors::AdminSession,
    utils::client_ip::get_client_ip, AppState,
};

#[instrument(skip(req, state, form))]
pub async fn submit_contact_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<impl Responder, AppError> {
    let client_addr = get_client_ip(&req, state.trust_x_forwarded_for);

    let response = state
        .contact_handler
        .submit(form.into_inner(), &client_addr)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(_admin, state))]
pub async fn admin_list_messages(
    _admin: AdminSession,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_contact_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(_admin, state))]
pub async fn admin_get_message(
    _admin: AdminSession,
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state
        .contact_handler
        .get_contact_message_by_id(&message_id)
        .await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(_admin, state))]
pub async fn admin_delete_message(
    _admin: AdminSession,
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state
        .contact_handler
        .delete_contact_message(&message_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
