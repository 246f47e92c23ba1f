pub mod blog_post;
pub mod comment;
pub mod contact;
pub mod patch;
pub mod project;
pub mod site_settings;
pub mod testimonial;
pub mod validation;
