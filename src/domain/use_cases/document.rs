use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::document::{wire_errors, Document, DocumentForm, UpdateDocumentRequest},
    errors::AppError,
    repositories::document::DocumentRepository,
    use_cases::category::category_filter,
    utils::parse_id::parse_id,
};

pub struct DocumentHandler<R>
where
    R: DocumentRepository + ?Sized,
{
    pub document_repo: Arc<R>,
}

impl<R> DocumentHandler<R>
where
    R: DocumentRepository + ?Sized,
{
    pub fn new(document_repo: Arc<R>) -> Self {
        DocumentHandler { document_repo }
    }

    /// Creates a new document
    pub async fn create_document(&self, form: DocumentForm) -> Result<Document, AppError> {
        let document = form.validated()?;
        self.document_repo.create_document(&document).await
    }

    /// Retrieves a document by its ID
    pub async fn get_document_by_id(&self, id: &str) -> Result<Document, AppError> {
        let valid_id = parse_id(id, "Document")?;
        self.document_repo
            .get_document_by_id(valid_id)
            .await
            .map_err(not_found)
    }

    /// Lists documents, optionally restricted to one category
    pub async fn list_documents(&self, category: Option<&str>) -> Result<Vec<Document>, AppError> {
        self.document_repo.list_documents(category_filter(category)).await
    }

    /// Replaces every field of an existing document
    pub async fn replace_document(&self, id: &str, form: DocumentForm) -> Result<Document, AppError> {
        let valid_id = parse_id(id, "Document")?;
        let document = form.validated()?;

        self.document_repo
            .update_document(valid_id, &document)
            .await
            .map_err(not_found)
    }

    /// Applies a partial update; absent fields keep their stored values
    pub async fn update_document(&self, id: &str, patch: UpdateDocumentRequest) -> Result<Document, AppError> {
        let valid_id = parse_id(id, "Document")?;
        patch.validate().map_err(wire_errors)?;

        let current = self.document_repo
            .get_document_by_id(valid_id)
            .await
            .map_err(not_found)?;

        let merged = patch.apply_to(current).validated()?;

        self.document_repo
            .update_document(valid_id, &merged)
            .await
            .map_err(not_found)
    }

    /// Deletes a document by its ID
    pub async fn delete_document(&self, id: &str) -> Result<(), AppError> {
        let valid_id = parse_id(id, "Document")?;
        self.document_repo
            .delete_document(valid_id)
            .await
            .map_err(not_found)
    }
}

fn not_found(e: AppError) -> AppError {
    match e {
        AppError::NotFound(_) => AppError::NotFound("Document not found".to_string()),
        _ => e,
    }
}
