pub mod admin_auth;
pub mod blog_posts;
pub mod comments;
pub mod contact;
pub mod home;
pub mod projects;
pub mod site;
pub mod system;
pub mod testimonials;
pub mod uploads;
