use crate::{
    entities::testimonial::{
        AdminNewTestimonialRequest, NewTestimonialRequest, Testimonial, TestimonialInsert,
        UpdateTestimonialRequest,
    },
    errors::AppError,
    repositories::testimonial::TestimonialRepository,
    utils::valid_uuid::valid_uuid,
};
use validator::Validate;

pub struct TestimonialsHandler<R>
where
    R: TestimonialRepository,
{
    pub testimonial_repo: R,
}

impl<R> TestimonialsHandler<R>
where
    R: TestimonialRepository,
{
    pub fn new(testimonial_repo: R) -> Self {
        TestimonialsHandler { testimonial_repo }
    }

    /// Public listing. Only approved rows ever leave this path.
    pub async fn list_public_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        self.testimonial_repo.list_testimonials(true).await
    }

    /// Admin listing, pending and approved alike, flag visible.
    pub async fn list_all_testimonials(&self) -> Result<Vec<Testimonial>, AppError> {
        self.testimonial_repo.list_testimonials(false).await
    }

    /// Public submission; always enters the queue unapproved.
    pub async fn submit_testimonial(
        &self,
        request: NewTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let insert = TestimonialInsert::from_public(request)?;
        self.testimonial_repo.create_testimonial(&insert).await
    }

    pub async fn create_testimonial(
        &self,
        request: AdminNewTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let insert = TestimonialInsert::from_admin(request)?;
        self.testimonial_repo.create_testimonial(&insert).await
    }

    pub async fn update_testimonial(
        &self,
        id: &str,
        patch: &UpdateTestimonialRequest,
    ) -> Result<Testimonial, AppError> {
        let valid_id = valid_uuid(id)?;
        patch.validate()?;
        self.testimonial_repo
            .update_testimonial(&valid_id, patch)
            .await
    }

    /// Idempotent approval toggle; re-applying the current state succeeds.
    pub async fn set_approved(&self, id: &str, approved: bool) -> Result<Testimonial, AppError> {
        let valid_id = valid_uuid(id)?;
        self.testimonial_repo
            .set_testimonial_approved(&valid_id, approved)
            .await
    }

    pub async fn delete_testimonial(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.testimonial_repo.delete_testimonial(&valid_id).await
    }
}
