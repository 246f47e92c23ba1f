use async_trait::async_trait;
use chrono::Utc;
use mockall::{mock, predicate::eq};
use uuid::Uuid;

use portfolio_api::{
    entities::{
        blog_post::{BlogPost, BlogPostInsert, NewBlogPostRequest, UpdateBlogPostRequest},
        project::{
            NewProjectRequest, Project, ProjectCategory, ProjectInsert, UpdateProjectRequest,
        },
    },
    errors::AppError,
    repositories::{blog_post::BlogPostRepository, project::ProjectRepository},
    use_cases::{blog::BlogHandler, projects::ProjectsHandler},
};

mock! {
    ProjectRepo {}

    #[async_trait]
    impl ProjectRepository for ProjectRepo {
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
}

mock! {
    PostRepo {}

    #[async_trait]
    impl BlogPostRepository for PostRepo {
        async fn list_blog_posts(&self) -> Result<Vec<BlogPost>, AppError>;
        async fn get_blog_post_by_id(&self, id: &Uuid) -> Result<BlogPost, AppError>;
        async fn get_blog_post_by_slug(&self, slug: &str) -> Result<BlogPost, AppError>;
        async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<BlogPost, AppError>;
        async fn update_blog_post(
            &self,
            id: &Uuid,
            patch: &UpdateBlogPostRequest,
        ) -> Result<BlogPost, AppError>;
        async fn delete_blog_post(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn stored_project(insert: &ProjectInsert) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: insert.title.clone(),
        slug: insert.slug.clone(),
        description: insert.description.clone(),
        category: insert.category,
        tech: insert.tech.clone(),
        image_url: insert.image_url.clone(),
        demo_url: insert.demo_url.clone(),
        repo_url: insert.repo_url.clone(),
        created_at: Utc::now(),
    }
}

fn stored_post(insert: &BlogPostInsert) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: insert.title.clone(),
        slug: insert.slug.clone(),
        excerpt: insert.excerpt.clone(),
        content_markdown: insert.content_markdown.clone(),
        cover_image_url: insert.cover_image_url.clone(),
        published_at: Utc::now(),
    }
}

fn new_project_request() -> NewProjectRequest {
    NewProjectRequest {
        title: "Issue Tracker".into(),
        slug: None,
        description: "A small issue tracker".into(),
        category: ProjectCategory::FullStack,
        tech: vec!["Rust".into(), "Postgres".into()],
        image_url: None,
        demo_url: None,
        repo_url: Some("https://github.com/example/tracker".into()),
    }
}

#[tokio::test]
async fn created_project_carries_the_supplied_fields_and_generated_slug() {
    let mut repo = MockProjectRepo::new();
    repo.expect_create_project()
        .times(1)
        .withf(|insert| insert.slug == "issue-tracker" && insert.tech.len() == 2)
        .returning(|insert| Ok(stored_project(insert)));

    let handler = ProjectsHandler::new(repo);
    let created = handler.create_project(new_project_request()).await.unwrap();

    assert_eq!(created.title, "Issue Tracker");
    assert_eq!(created.slug, "issue-tracker");
    assert_eq!(created.category, ProjectCategory::FullStack);
}

#[tokio::test]
async fn get_by_slug_propagates_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_slug()
        .with(eq("missing"))
        .times(1)
        .returning(|_| Err(AppError::NotFound("Record not found".into())));

    let handler = ProjectsHandler::new(repo);
    let result = handler.get_project_by_slug("missing").await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn title_only_update_keeps_the_slug_unchanged() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project()
        .times(1)
        .withf(|_, patch| patch.slug.is_unchanged() && patch.title.as_str() == Some("Renamed"))
        .returning(|id, _| {
            Ok(Project {
                id: *id,
                title: "Renamed".into(),
                slug: "issue-tracker".into(),
                description: "d".into(),
                category: ProjectCategory::Backend,
                tech: vec![],
                image_url: None,
                demo_url: None,
                repo_url: None,
                created_at: Utc::now(),
            })
        });

    let patch: UpdateProjectRequest = serde_json::from_str(r#"{"title": "Renamed"}"#).unwrap();
    let handler = ProjectsHandler::new(repo);
    let updated = handler
        .update_project(&Uuid::new_v4().to_string(), &patch)
        .await
        .unwrap();

    assert_eq!(updated.slug, "issue-tracker");
}

#[tokio::test]
async fn invalid_patch_never_reaches_the_store() {
    let mut repo = MockProjectRepo::new();
    repo.expect_update_project().never();

    let patch: UpdateProjectRequest = serde_json::from_str(r#"{"slug": "Bad Slug"}"#).unwrap();
    let handler = ProjectsHandler::new(repo);
    let result = handler
        .update_project(&Uuid::new_v4().to_string(), &patch)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn deleting_a_missing_project_reports_not_found() {
    let mut repo = MockProjectRepo::new();
    repo.expect_delete_project()
        .times(1)
        .returning(|_| Err(AppError::NotFound("Project not found".into())));

    let handler = ProjectsHandler::new(repo);
    let result = handler.delete_project(&Uuid::new_v4().to_string()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn post_detail_renders_sanitized_html() {
    let mut repo = MockPostRepo::new();
    repo.expect_get_blog_post_by_slug()
        .with(eq("my-post"))
        .times(1)
        .returning(|_| {
            Ok(BlogPost {
                id: Uuid::new_v4(),
                title: "My Post".into(),
                slug: "my-post".into(),
                excerpt: "excerpt".into(),
                content_markdown: "**bold** <script>alert(1)</script>".into(),
                cover_image_url: None,
                published_at: Utc::now(),
            })
        });

    let handler = BlogHandler::new(repo);
    let detail = handler.get_blog_post_by_slug("my-post").await.unwrap();

    assert!(detail.content_html.contains("<strong>bold</strong>"));
    assert!(!detail.content_html.contains("<script>"));
}

#[tokio::test]
async fn created_post_round_trips_slug_to_get_by_slug() {
    let mut repo = MockPostRepo::new();
    repo.expect_create_blog_post()
        .times(1)
        .returning(|insert| Ok(stored_post(insert)));

    let request = NewBlogPostRequest {
        title: "Shipping a Side Project".into(),
        slug: None,
        excerpt: "Notes from shipping a side project.".into(),
        content_markdown: "Ship early.".into(),
        cover_image_url: None,
    };

    let handler = BlogHandler::new(repo);
    let created = handler.create_blog_post(request).await.unwrap();
    assert_eq!(created.slug, "shipping-a-side-project");

    let slug = created.slug.clone();
    let expected_slug = slug.clone();
    let mut read_repo = MockPostRepo::new();
    read_repo
        .expect_get_blog_post_by_slug()
        .withf(move |s| s == expected_slug)
        .times(1)
        .returning(move |_| Ok(created.clone()));

    let read_handler = BlogHandler::new(read_repo);
    let detail = read_handler.get_blog_post_by_slug(&slug).await.unwrap();
    assert_eq!(detail.slug, "shipping-a-side-project");
    assert_eq!(detail.title, "Shipping a Side Project");
}
