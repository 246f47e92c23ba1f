pub mod blog_post;
pub mod comment;
pub mod contact;
pub mod project;
pub mod site_settings;
pub mod sqlx_repo;
pub mod testimonial;
