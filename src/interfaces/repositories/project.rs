use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};

use crate::{
    db::memory::MemoryTable,
    entities::project::{NewProject, Project},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError>;
    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError>;
    /// `category` is already normalized: `None` means every project.
    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError>;
    async fn update_project(&self, id: i64, project: &NewProject) -> Result<Project, AppError>;
    async fn delete_project(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, category, image, technologies, link, github)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.image)
        .bind(&project.technologies)
        .bind(project.link.as_deref())
        .bind(project.github.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(project)
    }

    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM projects");

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category);
        }

        builder.push(" ORDER BY id");

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn update_project(&self, id: i64, project: &NewProject) -> Result<Project, AppError> {
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = $1,
                description = $2,
                category = $3,
                image = $4,
                technologies = $5,
                link = $6,
                github = $7
            WHERE id = $8
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.category)
        .bind(&project.image)
        .bind(&project.technologies)
        .bind(project.link.as_deref())
        .bind(project.github.as_deref())
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Record not found".into()));
        }

        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for MemoryTable<Project> {
    async fn create_project(&self, project: &NewProject) -> Result<Project, AppError> {
        Ok(self.insert_with(|id| project.clone().into_project(id)))
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Project, AppError> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound("Record not found".into()))
    }

    async fn list_projects(&self, category: Option<&str>) -> Result<Vec<Project>, AppError> {
        Ok(self.list_where(|p| category.is_none_or(|c| p.category == c)))
    }

    async fn update_project(&self, id: i64, project: &NewProject) -> Result<Project, AppError> {
        self.replace_with(id, |_| project.clone().into_project(id))
            .ok_or_else(|| AppError::NotFound("Record not found".into()))
    }

    async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Record not found".into()))
        }
    }
}
