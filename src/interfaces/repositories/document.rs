use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};

use crate::{
    db::memory::MemoryTable,
    entities::document::{Document, NewDocument},
    errors::AppError,
    repositories::sqlx_repo::SqlxDocumentRepo,
};

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn create_document(&self, document: &NewDocument) -> Result<Document, AppError>;
    async fn get_document_by_id(&self, id: i64) -> Result<Document, AppError>;
    /// `category` is already normalized: `None` means every document.
    async fn list_documents(&self, category: Option<&str>) -> Result<Vec<Document>, AppError>;
    async fn update_document(&self, id: i64, document: &NewDocument) -> Result<Document, AppError>;
    async fn delete_document(&self, id: i64) -> Result<(), AppError>;
}

impl SqlxDocumentRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxDocumentRepo { pool }
    }
}

#[async_trait]
impl DocumentRepository for SqlxDocumentRepo {
    async fn create_document(&self, document: &NewDocument) -> Result<Document, AppError> {
        let created = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (title, description, type, category, file_url, size)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&document.title)
        .bind(&document.description)
        .bind(&document.doc_type)
        .bind(&document.category)
        .bind(&document.file_url)
        .bind(&document.size)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_document_by_id(&self, id: i64) -> Result<Document, AppError> {
        let document = sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(document)
    }

    async fn list_documents(&self, category: Option<&str>) -> Result<Vec<Document>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM documents");

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category);
        }

        builder.push(" ORDER BY id");

        let documents = builder
            .build_query_as::<Document>()
            .fetch_all(&self.pool)
            .await?;

        Ok(documents)
    }

    async fn update_document(&self, id: i64, document: &NewDocument) -> Result<Document, AppError> {
        let updated = sqlx::query_as::<_, Document>(
            r#"
            UPDATE documents SET
                title = $1,
                description = $2,
                type = $3,
                category = $4,
                file_url = $5,
                size = $6
            WHERE id = $7
            RETURNING *
            "#,
        )
        .bind(&document.title)
        .bind(&document.description)
        .bind(&document.doc_type)
        .bind(&document.category)
        .bind(&document.file_url)
        .bind(&document.size)
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_document(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
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
impl DocumentRepository for MemoryTable<Document> {
    async fn create_document(&self, document: &NewDocument) -> Result<Document, AppError> {
        Ok(self.insert_with(|id| document.clone().into_document(id)))
    }

    async fn get_document_by_id(&self, id: i64) -> Result<Document, AppError> {
        self.get(id)
            .ok_or_else(|| AppError::NotFound("Record not found".into()))
    }

    async fn list_documents(&self, category: Option<&str>) -> Result<Vec<Document>, AppError> {
        Ok(self.list_where(|d| category.is_none_or(|c| d.category == c)))
    }

    async fn update_document(&self, id: i64, document: &NewDocument) -> Result<Document, AppError> {
        self.replace_with(id, |_| document.clone().into_document(id))
            .ok_or_else(|| AppError::NotFound("Record not found".into()))
    }

    async fn delete_document(&self, id: i64) -> Result<(), AppError> {
        if self.remove(id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Record not found".into()))
        }
    }
}
