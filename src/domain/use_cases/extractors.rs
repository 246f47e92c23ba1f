use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{auth::admin_token::AdminAuth, constants::ADMIN_COOKIE_NAME, errors::AppError};

/// Extractor guarding admin routes via the session cookie.
/// Returns 401 when the cookie is missing or does not match.
/// Usage: add `_admin: AdminSession` as a handler parameter.
#[derive(Debug)]
pub struct AdminSession;

impl FromRequest for AdminSession {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(auth) = req.app_data::<web::Data<AdminAuth>>() else {
            tracing::error!("AdminAuth missing from app data");
            return ready(Err(AppError::Unauthorized.into()));
        };

        match req.cookie(ADMIN_COOKIE_NAME) {
            Some(cookie) if auth.verify_token(cookie.value()) => ready(Ok(AdminSession)),
            _ => ready(Err(AppError::Unauthorized.into())),
        }
    }
}
