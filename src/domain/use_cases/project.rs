use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::project::{Project, ProjectForm, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    use_cases::category::category_filter,
    utils::parse_id::parse_id,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    /// Creates a new project
    pub async fn create_project(&self, form: ProjectForm) -> Result<Project, AppError> {
        let project = form.validated()?;
        self.project_repo.create_project(&project).await
    }

    /// Retrieves a project by its ID
    pub async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = parse_id(id, "Project")?;
        self.project_repo
            .get_project_by_id(valid_id)
            .await
            .map_err(not_found)
    }

    /// Lists projects, optionally restricted to one category
    pub async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(category_filter(category)).await
    }

    /// Replaces every field of an existing project
    pub async fn replace_project(&self, id: &str, form: ProjectForm) -> Result<Project, AppError> {
        let valid_id = parse_id(id, "Project")?;
        let project = form.validated()?;

        self.project_repo
            .update_project(valid_id, &project)
            .await
            .map_err(not_found)
    }

    /// Applies a partial update; absent fields keep their stored values
    pub async fn update_project(&self, id: &str, patch: UpdateProjectRequest) -> Result<Project, AppError> {
        let valid_id = parse_id(id, "Project")?;
        patch.validate()?;

        let current = self.project_repo
            .get_project_by_id(valid_id)
            .await
            .map_err(not_found)?;

        let merged = patch.apply_to(current).validated()?;

        self.project_repo
            .update_project(valid_id, &merged)
            .await
            .map_err(not_found)
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = parse_id(id, "Project")?;
        self.project_repo
            .delete_project(valid_id)
            .await
            .map_err(not_found)
    }
}

fn not_found(e: AppError) -> AppError {
    match e {
        AppError::NotFound(_) => AppError::NotFound("Project not found".to_string()),
        _ => e,
    }
}
