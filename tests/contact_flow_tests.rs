use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use portfolio_api::{
    email::mailer::{Mailer, OutboundEmail},
    entities::contact::{ContactForm, ContactMessage, ContactMessageInsert},
    errors::AppError,
    limiter::rate_limiter::SlidingWindowLimiter,
    repositories::contact::ContactMessageRepository,
    use_cases::contact::ContactHandler,
};

mock! {
    ContactRepo {}

    #[async_trait]
    impl ContactMessageRepository for ContactRepo {
        async fn create_contact_message(
            &self,
            message: &ContactMessageInsert,
        ) -> Result<ContactMessage, AppError>;
        async fn get_contact_message_by_id(&self, id: &Uuid) -> Result<ContactMessage, AppError>;
        async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
        async fn count_contact_messages(&self) -> Result<i64, AppError>;
        async fn delete_contact_message(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

mock! {
    NotifyMailer {}

    #[async_trait]
    impl Mailer for NotifyMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<(), AppError>;
    }
}

fn stored_message(insert: &ContactMessageInsert) -> ContactMessage {
    ContactMessage {
        id: Uuid::new_v4(),
        name: insert.name.clone(),
        email: insert.email.clone(),
        phone: insert.phone.clone(),
        subject: insert.subject.clone(),
        message: insert.message.clone(),
        created_at: Utc::now(),
    }
}

fn form() -> ContactForm {
    ContactForm {
        name: "Robin".into(),
        email: "robin@example.com".into(),
        phone: None,
        subject: "Project inquiry".into(),
        message: "I would like to discuss a project.".into(),
    }
}

fn wide_open_limiter() -> SlidingWindowLimiter {
    SlidingWindowLimiter::new(100, Duration::from_secs(60))
}

#[tokio::test]
async fn fourth_submission_from_same_address_is_rate_limited() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(3)
        .returning(|insert| Ok(stored_message(insert)));

    let mut mailer = MockNotifyMailer::new();
    mailer.expect_send().times(3).returning(|_| Ok(()));

    let limiter = SlidingWindowLimiter::new(3, Duration::from_secs(900));
    let handler = ContactHandler::new(repo, mailer, limiter);

    for _ in 0..3 {
        handler.submit(form(), "203.0.113.9").await.unwrap();
    }

    let fourth = handler.submit(form(), "203.0.113.9").await;
    assert!(matches!(fourth, Err(AppError::RateLimited { .. })));
}

#[tokio::test]
async fn different_addresses_do_not_share_the_window() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(4)
        .returning(|insert| Ok(stored_message(insert)));

    let mut mailer = MockNotifyMailer::new();
    mailer.expect_send().times(4).returning(|_| Ok(()));

    let limiter = SlidingWindowLimiter::new(3, Duration::from_secs(900));
    let handler = ContactHandler::new(repo, mailer, limiter);

    for _ in 0..3 {
        handler.submit(form(), "203.0.113.9").await.unwrap();
    }
    handler.submit(form(), "198.51.100.7").await.unwrap();
}

#[tokio::test]
async fn oversized_message_fails_before_any_persistence_or_email() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message().never();

    let mut mailer = MockNotifyMailer::new();
    mailer.expect_send().never();

    let handler = ContactHandler::new(repo, mailer, wide_open_limiter());

    let mut oversized = form();
    oversized.message = "x".repeat(5001);

    let result = handler.submit(oversized, "203.0.113.9").await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn missing_required_field_names_the_field() {
    let repo = MockContactRepo::new();
    let mailer = MockNotifyMailer::new();
    let handler = ContactHandler::new(repo, mailer, wide_open_limiter());

    let mut bad = form();
    bad.email = "not-an-email".into();

    match handler.submit(bad, "203.0.113.9").await {
        Err(AppError::ValidationError(fields)) => {
            assert!(fields.iter().any(|f| f.field == "email"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn markup_in_message_reaches_the_email_escaped() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|insert| Ok(stored_message(insert)));

    let mut mailer = MockNotifyMailer::new();
    mailer
        .expect_send()
        .times(1)
        .withf(|email| {
            email.html_body.contains("&lt;script&gt;") && !email.html_body.contains("<script>")
        })
        .returning(|_| Ok(()));

    let handler = ContactHandler::new(repo, mailer, wide_open_limiter());

    let mut hostile = form();
    hostile.message = "<script>alert('pwn')</script>".into();

    handler.submit(hostile, "203.0.113.9").await.unwrap();
}

#[tokio::test]
async fn notification_email_replies_to_the_submitter() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|insert| Ok(stored_message(insert)));

    let mut mailer = MockNotifyMailer::new();
    mailer
        .expect_send()
        .times(1)
        .withf(|email| email.reply_to == "robin@example.com")
        .returning(|_| Ok(()));

    let handler = ContactHandler::new(repo, mailer, wide_open_limiter());
    handler.submit(form(), "203.0.113.9").await.unwrap();
}

#[tokio::test]
async fn failed_email_is_surfaced_without_rolling_back_the_message() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|insert| Ok(stored_message(insert)));
    // Message-first durability: no delete after a notification failure
    repo.expect_delete_contact_message().never();

    let mut mailer = MockNotifyMailer::new();
    mailer
        .expect_send()
        .times(1)
        .returning(|_| Err(AppError::Notification("provider returned 500".into())));

    let handler = ContactHandler::new(repo, mailer, wide_open_limiter());

    let result = handler.submit(form(), "203.0.113.9").await;
    assert!(matches!(result, Err(AppError::Notification(_))));
}

#[tokio::test]
async fn store_failure_propagates_and_sends_no_email() {
    let mut repo = MockContactRepo::new();
    repo.expect_create_contact_message()
        .times(1)
        .returning(|_| Err(AppError::Store("connection refused".into())));

    let mut mailer = MockNotifyMailer::new();
    mailer.expect_send().never();

    let handler = ContactHandler::new(repo, mailer, wide_open_limiter());

    let result = handler.submit(form(), "203.0.113.9").await;
    assert!(matches!(result, Err(AppError::Store(_))));
}
