mod domain;
mod infrastructure;
mod interfaces;
pub mod background_task;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{auth, db, email, limiter, media, utils};
pub use interfaces::{handlers, repositories, routes};

use auth::admin_token::AdminAuth;
use email::mailer::HttpMailer;
use errors::AppError;
use limiter::rate_limiter::SlidingWindowLimiter;
use media::store::HttpObjectStore;
use repositories::sqlx_repo::{
    SqlxBlogPostRepo, SqlxCommentRepo, SqlxContactMessageRepo, SqlxProjectRepo,
    SqlxSiteSettingsRepo, SqlxTestimonialRepo,
};
use std::time::Duration;
use use_cases::{
    blog::BlogHandler, comments::CommentsHandler, contact::ContactHandler, media::MediaHandler,
    projects::ProjectsHandler, testimonials::TestimonialsHandler,
};

pub type AppProjectsHandler = ProjectsHandler<SqlxProjectRepo>;
pub type AppBlogHandler = BlogHandler<SqlxBlogPostRepo>;
pub type AppTestimonialsHandler = TestimonialsHandler<SqlxTestimonialRepo>;
pub type AppCommentsHandler = CommentsHandler<SqlxCommentRepo>;
pub type AppContactHandler =
    ContactHandler<SqlxContactMessageRepo, HttpMailer, SlidingWindowLimiter>;
pub type AppMediaHandler = MediaHandler<HttpObjectStore, SqlxSiteSettingsRepo>;

pub struct AppState {
    pub projects_handler: AppProjectsHandler,
    pub blog_handler: AppBlogHandler,
    pub testimonials_handler: AppTestimonialsHandler,
    pub comments_handler: AppCommentsHandler,
    pub contact_handler: AppContactHandler,
    pub media_handler: AppMediaHandler,
    pub trust_x_forwarded_for: bool,
    pub db_pool: sqlx::PgPool,
}

impl AppState {
    /// Wires the concrete stack. Also returns the rate limiter so the
    /// caller can hand it to the eviction task.
    pub fn new(
        config: &settings::AppConfig,
        pool: sqlx::PgPool,
    ) -> Result<(Self, SlidingWindowLimiter), AppError> {
        let limiter = SlidingWindowLimiter::new(
            config.contact_rate_limit,
            Duration::from_secs(config.contact_rate_window_secs),
        );

        let mailer = HttpMailer::from_config(config)?;
        let media_store = HttpObjectStore::from_config(config)?;

        let state = AppState {
            projects_handler: ProjectsHandler::new(SqlxProjectRepo::new(pool.clone())),
            blog_handler: BlogHandler::new(SqlxBlogPostRepo::new(pool.clone())),
            testimonials_handler: TestimonialsHandler::new(SqlxTestimonialRepo::new(pool.clone())),
            comments_handler: CommentsHandler::new(SqlxCommentRepo::new(pool.clone())),
            contact_handler: ContactHandler::new(
                SqlxContactMessageRepo::new(pool.clone()),
                mailer,
                limiter.clone(),
            ),
            media_handler: MediaHandler::new(media_store, SqlxSiteSettingsRepo::new(pool.clone())),
            trust_x_forwarded_for: config.trust_x_forwarded_for,
            db_pool: pool,
        };

        Ok((state, limiter))
    }

    pub fn admin_auth(config: &settings::AppConfig) -> AdminAuth {
        AdminAuth::from_config(config)
    }
}
