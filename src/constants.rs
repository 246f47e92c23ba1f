use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

// Contact form field ceilings
pub const MAX_CONTACT_NAME_LENGTH: u64 = 100;
pub const MAX_CONTACT_SUBJECT_LENGTH: u64 = 200;
pub const MAX_CONTACT_MESSAGE_LENGTH: u64 = 5000;
pub const MAX_CONTACT_PHONE_LENGTH: u64 = 30;

pub const MAX_TESTIMONIAL_CONTENT_LENGTH: u64 = 500;

// Sliding-window defaults for the contact endpoint, per client address
pub const CONTACT_RATE_LIMIT: u32 = 3;
pub const CONTACT_RATE_WINDOW: Duration = Duration::from_secs(15 * 60);

pub const EMAIL_SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub const ADMIN_COOKIE_NAME: &str = "admin_token";
pub const ADMIN_COOKIE_PATH: &str = "/admin";
pub const ADMIN_SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24);

pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
