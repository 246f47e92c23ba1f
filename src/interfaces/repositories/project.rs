use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        patch::Patch,
        project::{Project, ProjectInsert, UpdateProjectRequest},
    },
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

fn map_slug_conflict(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some("projects_slug_key") {
            return AppError::Conflict("Slug already exists".into());
        }
    }
    AppError::from(e)
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(project)
    }

    async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE slug = $1")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(project)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, slug, description, category, tech, image_url, demo_url, repo_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.slug)
        .bind(&project.description)
        .bind(project.category)
        .bind(&project.tech)
        .bind(&project.image_url)
        .bind(&project.demo_url)
        .bind(&project.repo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slug_conflict)?;

        Ok(created)
    }

    async fn update_project(
        &self,
        id: &Uuid,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        if patch.is_empty() {
            return self.get_project_by_id(id).await;
        }

        let mut builder = QueryBuilder::new("UPDATE projects SET ");
        let mut updates = builder.separated(", ");

        if let Some(title) = patch.title.value_ref() {
            updates.push("title = ").push_bind_unseparated(title);
        }
        if let Some(slug) = patch.slug.value_ref() {
            updates.push("slug = ").push_bind_unseparated(slug);
        }
        if let Some(description) = patch.description.value_ref() {
            updates
                .push("description = ")
                .push_bind_unseparated(description);
        }
        if let Some(category) = patch.category.value_ref() {
            updates.push("category = ").push_bind_unseparated(*category);
        }
        if let Some(tech) = patch.tech.value_ref() {
            updates.push("tech = ").push_bind_unseparated(tech);
        }
        match &patch.image_url {
            Patch::Value(url) => {
                updates.push("image_url = ").push_bind_unseparated(url);
            }
            Patch::Null => {
                updates.push("image_url = NULL");
            }
            Patch::Unchanged => {}
        }
        match &patch.demo_url {
            Patch::Value(url) => {
                updates.push("demo_url = ").push_bind_unseparated(url);
            }
            Patch::Null => {
                updates.push("demo_url = NULL");
            }
            Patch::Unchanged => {}
        }
        match &patch.repo_url {
            Patch::Value(url) => {
                updates.push("repo_url = ").push_bind_unseparated(url);
            }
            Patch::Null => {
                updates.push("repo_url = NULL");
            }
            Patch::Unchanged => {}
        }

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Project>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_slug_conflict)?;

        Ok(updated)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
