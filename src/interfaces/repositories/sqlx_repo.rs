use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxTestimonialRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxCommentRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactMessageRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSiteSettingsRepo {
    pub pool: PgPool,
}
