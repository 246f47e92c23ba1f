use async_trait::async_trait;
use serde::Serialize;

use crate::{constants::EMAIL_SEND_TIMEOUT, errors::AppError, settings::AppConfig};

#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub subject: String,
    pub html_body: String,
    /// Submitter's address, so a direct reply reaches them.
    pub reply_to: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError>;
}

/// Transactional-email provider speaking a JSON HTTP API.
pub struct HttpMailer {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    from: String,
    to: String,
}

impl HttpMailer {
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(EMAIL_SEND_TIMEOUT)
            .build()
            .map_err(|e| AppError::Notification(format!("mail client init failed: {e}")))?;

        Ok(HttpMailer {
            client,
            api_base: config.email_api_base.trim_end_matches('/').to_string(),
            api_key: config.email_api_key.clone(),
            from: config.email_from.clone(),
            to: config.operator_email.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), AppError> {
        let payload = serde_json::json!({
            "from": self.from,
            "to": [self.to],
            "reply_to": email.reply_to,
            "subject": email.subject,
            "html": email.html_body,
        });

        let response = self
            .client
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Notification(format!("email send failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Notification(format!(
                "email provider returned {status}: {detail}"
            )));
        }

        Ok(())
    }
}

/// Escape user-supplied text before interpolating it into an HTML email
/// body. Covers the five characters that can change markup meaning.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_tags_are_neutralized() {
        let escaped = escape_html("<script>alert('x')</script>");
        assert_eq!(
            escaped,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_first_pass_safe() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        // Already-escaped input is escaped again rather than left live
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_is_untouched(){
        assert_eq!(escape_html("hello world"), "hello world");
    }
}
