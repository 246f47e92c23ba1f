use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::{
    constants::{ADMIN_COOKIE_NAME, ADMIN_COOKIE_PATH, ADMIN_SESSION_TTL},
    errors::AppError,
    settings::AppConfig,
};

/// Cookie-session admin authentication.
///
/// The session cookie value is a keyed hash of the admin password, never the
/// password itself, so a leaked cookie cannot be replayed as a login
/// credential elsewhere.
#[derive(Clone)]
pub struct AdminAuth {
    password: Zeroizing<String>,
    signing_secret: Zeroizing<String>,
    secure_cookies: bool,
}

impl AdminAuth {
    pub fn from_config(config: &AppConfig) -> Self {
        AdminAuth {
            password: Zeroizing::new(config.admin_password.clone()),
            signing_secret: Zeroizing::new(config.admin_token_secret.clone()),
            secure_cookies: config.is_production(),
        }
    }

    fn expected_token(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.password.as_bytes());
        hasher.update(self.signing_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Validate a login attempt and mint the session cookie.
    pub fn login(&self, candidate: &str) -> Result<Cookie<'static>, AppError> {
        if candidate.is_empty() || candidate != self.password.as_str() {
            return Err(AppError::Unauthorized);
        }
        Ok(self.session_cookie(self.expected_token(), ADMIN_SESSION_TTL.as_secs() as i64))
    }

    pub fn verify_token(&self, token: &str) -> bool {
        !token.is_empty() && token == self.expected_token()
    }

    /// Expired cookie with an empty value, used to log out.
    pub fn logout_cookie(&self) -> Cookie<'static> {
        self.session_cookie(String::new(), 0)
    }

    fn session_cookie(&self, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build(ADMIN_COOKIE_NAME, value)
            .path(ADMIN_COOKIE_PATH)
            .http_only(true)
            .secure(self.secure_cookies)
            .same_site(SameSite::Strict)
            .max_age(CookieDuration::seconds(max_age_secs))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AdminAuth {
        AdminAuth {
            password: Zeroizing::new("correct horse battery staple".to_string()),
            signing_secret: Zeroizing::new("0123456789abcdef0123456789abcdef".to_string()),
            secure_cookies: false,
        }
    }

    #[test]
    fn login_with_wrong_password_is_unauthorized() {
        assert!(matches!(
            auth().login("wrong"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn cookie_holds_hash_not_password() {
        let cookie = auth().login("correct horse battery staple").unwrap();
        assert_ne!(cookie.value(), "correct horse battery staple");
        assert_eq!(cookie.value().len(), 64); // hex sha-256
        assert!(cookie.http_only().unwrap_or(false));
        assert_eq!(cookie.path(), Some(ADMIN_COOKIE_PATH));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn minted_token_round_trips_through_verify() {
        let auth = auth();
        let cookie = auth.login("correct horse battery staple").unwrap();
        assert!(auth.verify_token(cookie.value()));
        assert!(!auth.verify_token("tampered"));
        assert!(!auth.verify_token(""));
    }

    #[test]
    fn different_secret_invalidates_tokens() {
        let a = auth();
        let b = AdminAuth {
            password: Zeroizing::new("correct horse battery staple".to_string()),
            signing_secret: Zeroizing::new("another-secret-another-secret-xx".to_string()),
            secure_cookies: false,
        };
        let cookie = a.login("correct horse battery staple").unwrap();
        assert!(!b.verify_token(cookie.value()));
    }
}
