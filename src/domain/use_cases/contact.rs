use validator::Validate;

use crate::{
    email::mailer::{escape_html, Mailer, OutboundEmail},
    entities::contact::{
        ContactForm, ContactMessage, ContactMessageInsert, ContactMessageListResponse,
        ContactSubmissionResponse,
    },
    errors::AppError,
    limiter::rate_limiter::{RateDecision, RateLimiter},
    repositories::contact::ContactMessageRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ContactHandler<R, M, L>
where
    R: ContactMessageRepository,
    M: Mailer,
    L: RateLimiter,
{
    pub contact_repo: R,
    pub mailer: M,
    pub limiter: L,
}

impl<R, M, L> ContactHandler<R, M, L>
where
    R: ContactMessageRepository,
    M: Mailer,
    L: RateLimiter,
{
    pub fn new(contact_repo: R, mailer: M, limiter: L) -> Self {
        ContactHandler {
            contact_repo,
            mailer,
            limiter,
        }
    }

    /// Contact intake: rate limit, validate, persist, notify, in that
    /// order. The message is durable once persisted; a failed notification
    /// is surfaced but never rolls the row back.
    pub async fn submit(
        &self,
        form: ContactForm,
        client_addr: &str,
    ) -> Result<ContactSubmissionResponse, AppError> {
        if let RateDecision::Limited { retry_after } = self.limiter.check(client_addr) {
            tracing::warn!(client_addr, "contact submission rate limited");
            return Err(AppError::RateLimited { retry_after });
        }

        form.validate()?;

        let insert = ContactMessageInsert::from(form);
        let message = self.contact_repo.create_contact_message(&insert).await?;

        let email = notification_email(&message);
        if let Err(e) = self.mailer.send(&email).await {
            tracing::error!(message_id = %message.id, "notification email failed: {}", e);
            return Err(e);
        }

        Ok(ContactSubmissionResponse {
            success: true,
            id: message.id,
        })
    }

    pub async fn get_contact_message_by_id(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = valid_uuid(id)?;
        self.contact_repo.get_contact_message_by_id(&valid_id).await
    }

    pub async fn list_contact_messages(&self) -> Result<ContactMessageListResponse, AppError> {
        let messages = self.contact_repo.list_contact_messages().await?;
        let total = self.contact_repo.count_contact_messages().await?;

        Ok(ContactMessageListResponse { messages, total })
    }

    pub async fn delete_contact_message(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.contact_repo.delete_contact_message(&valid_id).await
    }
}

/// Build the operator notification. Every user-supplied field is escaped
/// before it reaches the HTML body; the reply-to goes to the submitter.
pub fn notification_email(message: &ContactMessage) -> OutboundEmail {
    let name = escape_html(&message.name);
    let email = escape_html(&message.email);
    let subject = escape_html(&message.subject);
    let body = escape_html(&message.message);
    let phone_line = message
        .phone
        .as_deref()
        .map(|phone| format!("<p><strong>Phone:</strong> {}</p>", escape_html(phone)))
        .unwrap_or_default();

    let html_body = format!(
        "<h2>New message from your portfolio</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>\
         {phone_line}\
         <p><strong>Subject:</strong> {subject}</p>\
         <p><strong>Message:</strong></p>\
         <p>{body}</p>\
         <hr />\
         <p>Reply to this email to reach {name} directly.</p>"
    );

    OutboundEmail {
        subject: format!("New contact message: {}", message.subject),
        html_body,
        reply_to: message.email.clone(),
    }
}
