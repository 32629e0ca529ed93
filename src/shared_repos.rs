use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    db::{memory::MemoryTable, seed},
    entities::{contact_message::ContactMessage, document::Document, project::Project},
    repositories::{
        contact_message::ContactMessageRepository,
        document::DocumentRepository,
        project::ProjectRepository,
        sqlx_repo::{SqlxContactMessageRepo, SqlxDocumentRepo, SqlxProjectRepo},
    },
    settings::StorageBackend,
};

#[derive(Clone)]
pub struct SharedRepositories {
    pub project_repo: Arc<dyn ProjectRepository>,
    pub document_repo: Arc<dyn DocumentRepository>,
    pub contact_repo: Arc<dyn ContactMessageRepository>,
    pub backend: StorageBackend,
    pub pool: Option<PgPool>,
}

impl SharedRepositories {
    pub fn postgres(pool: PgPool) -> Self {
        SharedRepositories {
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            document_repo: Arc::new(SqlxDocumentRepo::new(pool.clone())),
            contact_repo: Arc::new(SqlxContactMessageRepo::new(pool.clone())),
            backend: StorageBackend::Postgres,
            pool: Some(pool),
        }
    }

    pub fn in_memory() -> Self {
        SharedRepositories {
            project_repo: Arc::new(MemoryTable::<Project>::new()),
            document_repo: Arc::new(MemoryTable::<Document>::new()),
            contact_repo: Arc::new(MemoryTable::<ContactMessage>::new()),
            backend: StorageBackend::Memory,
            pool: None,
        }
    }

    /// In-memory store pre-filled with sample projects and documents.
    pub fn seeded_in_memory() -> Self {
        let projects = MemoryTable::<Project>::new();
        for project in seed::sample_projects() {
            projects.insert_with(|id| project.into_project(id));
        }

        let documents = MemoryTable::<Document>::new();
        for document in seed::sample_documents() {
            documents.insert_with(|id| document.into_document(id));
        }

        tracing::info!(
            projects = projects.len(),
            documents = documents.len(),
            "Seeded in-memory storage"
        );

        SharedRepositories {
            project_repo: Arc::new(projects),
            document_repo: Arc::new(documents),
            ..Self::in_memory()
        }
    }
}
