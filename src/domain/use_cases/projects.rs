use validator::Validate;

use crate::{
    entities::project::{NewProjectRequest, Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectsHandler { project_repo }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        self.project_repo.get_project_by_slug(slug).await
    }

    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;
        self.project_repo.create_project(&insert).await
    }

    pub async fn update_project(
        &self,
        id: &str,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        patch.validate()?;
        self.project_repo.update_project(&valid_id, patch).await
    }

    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.delete_project(&valid_id).await
    }
}
