use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{auth::admin_token::AdminAuth, constants::ADMIN_COOKIE_NAME, errors::AppError};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[instrument(skip(auth, body))]
pub async fn login(
    auth: web::Data<AdminAuth>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let cookie = auth.login(&body.password).map_err(|e| {
        tracing::warn!("admin login rejected");
        e
    })?;

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({"success": true})))
}

#[instrument(skip(auth, req))]
pub async fn verify(auth: web::Data<AdminAuth>, req: HttpRequest) -> impl Responder {
    let authenticated = req
        .cookie(ADMIN_COOKIE_NAME)
        .map(|cookie| auth.verify_token(cookie.value()))
        .unwrap_or(false);

    if authenticated {
        HttpResponse::Ok().json(serde_json::json!({"authenticated": true}))
    } else {
        HttpResponse::Unauthorized().json(serde_json::json!({"authenticated": false}))
    }
}

#[instrument(skip(auth))]
pub async fn logout(auth: web::Data<AdminAuth>) -> impl Responder {
    HttpResponse::Ok()
        .cookie(auth.logout_cookie())
        .json(serde_json::json!({"success": true}))
}
