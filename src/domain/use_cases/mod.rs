pub mod blog;
pub mod comments;
pub mod contact;
pub mod extractors;
pub mod media;
pub mod projects;
pub mod testimonials;
