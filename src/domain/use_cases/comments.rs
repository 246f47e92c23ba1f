use crate::{
    entities::comment::{Comment, CommentInsert, NewCommentRequest},
    errors::AppError,
    repositories::comment::CommentRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct CommentsHandler<R>
where
    R: CommentRepository,
{
    pub comment_repo: R,
}

impl<R> CommentsHandler<R>
where
    R: CommentRepository,
{
    pub fn new(comment_repo: R) -> Self {
        CommentsHandler { comment_repo }
    }

    pub async fn list_comments(&self, post_slug: &str) -> Result<Vec<Comment>, AppError> {
        self.comment_repo.list_comments_for_post(post_slug).await
    }

    pub async fn create_comment(
        &self,
        post_slug: &str,
        request: NewCommentRequest,
    ) -> Result<Comment, AppError> {
        let insert = CommentInsert::new(post_slug, request)?;
        self.comment_repo.create_comment(&insert).await
    }

    pub async fn delete_comment(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.comment_repo.delete_comment(&valid_id).await
    }
}
