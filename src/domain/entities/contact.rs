use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    MAX_CONTACT_MESSAGE_LENGTH, MAX_CONTACT_NAME_LENGTH, MAX_CONTACT_PHONE_LENGTH,
    MAX_CONTACT_SUBJECT_LENGTH,
};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Inbound contact form. Ceilings bound both storage and the notification
/// email payload.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ContactForm {
    #[validate(length(min = 1, max = MAX_CONTACT_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = MAX_CONTACT_PHONE_LENGTH))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = MAX_CONTACT_SUBJECT_LENGTH))]
    pub subject: String,

    #[validate(length(min = 1, max = MAX_CONTACT_MESSAGE_LENGTH))]
    pub message: String,
}

#[derive(Debug)]
pub struct ContactMessageInsert {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl From<ContactForm> for ContactMessageInsert {
    fn from(form: ContactForm) -> Self {
        ContactMessageInsert {
            name: form.name,
            email: form.email,
            phone: form.phone,
            subject: form.subject,
            message: form.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactSubmissionResponse {
    pub success: bool,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ContactMessageListResponse {
    pub messages: Vec<ContactMessage>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Robin".into(),
            email: "robin@example.com".into(),
            phone: None,
            subject: "Project inquiry".into(),
            message: "Hello, I would like to discuss a project.".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        form().validate().unwrap();
    }

    #[test]
    fn message_over_5000_chars_fails() {
        let mut f = form();
        f.message = "x".repeat(5001);
        assert!(f.validate().is_err());
    }

    #[test]
    fn name_over_100_chars_fails() {
        let mut f = form();
        f.name = "n".repeat(101);
        assert!(f.validate().is_err());
    }

    #[test]
    fn subject_over_200_chars_fails() {
        let mut f = form();
        f.subject = "s".repeat(201);
        assert!(f.validate().is_err());
    }

    #[test]
    fn email_must_have_domain() {
        let mut f = form();
        f.email = "robin@".into();
        assert!(f.validate().is_err());
    }
}
