use validator::Validate;

use crate::{
    entities::blog_post::{
        BlogPost, BlogPostDetail, BlogPostInsert, BlogPostListItem, NewBlogPostRequest,
        UpdateBlogPostRequest,
    },
    errors::AppError,
    repositories::blog_post::BlogPostRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub post_repo: R,
}

impl<R> BlogHandler<R>
where
    R: BlogPostRepository,
{
    pub fn new(post_repo: R) -> Self {
        BlogHandler { post_repo }
    }

    pub async fn list_blog_posts(&self) -> Result<Vec<BlogPostListItem>, AppError> {
        let posts = self.post_repo.list_blog_posts().await?;
        Ok(posts.iter().map(BlogPost::to_list_item).collect())
    }

    /// Detail view renders the stored markdown to sanitized HTML.
    pub async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPostDetail, AppError> {
        let post = self.post_repo.get_blog_post_by_slug(slug).await?;
        Ok(post.to_detail())
    }

    pub async fn create_blog_post(&self, request: NewBlogPostRequest) -> Result<BlogPost, AppError> {
        let insert = BlogPostInsert::try_from(request)?;
        self.post_repo.create_blog_post(&insert).await
    }

    pub async fn update_blog_post(
        &self,
        id: &str,
        patch: &UpdateBlogPostRequest,
    ) -> Result<BlogPost, AppError> {
        let valid_id = valid_uuid(id)?;
        patch.validate()?;
        self.post_repo.update_blog_post(&valid_id, patch).await
    }

    pub async fn delete_blog_post(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.post_repo.delete_blog_post(&valid_id).await
    }
}
