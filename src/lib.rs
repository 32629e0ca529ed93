use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, mail, utils};

use repositories::{
    contact_message::ContactMessageRepository,
    document::DocumentRepository,
    mailer::Mailer,
    project::ProjectRepository,
};
use shared_repos::SharedRepositories;
use use_cases::{contact::ContactMessageHandler, document::DocumentHandler, project::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub document_handler: AppDocumentHandler,
    pub contact_handler: AppContactHandler,
    pub repos: SharedRepositories,
}

pub type AppProjectHandler = ProjectHandler<dyn ProjectRepository>;
pub type AppDocumentHandler = DocumentHandler<dyn DocumentRepository>;
pub type AppContactHandler = ContactMessageHandler<dyn ContactMessageRepository, dyn Mailer>;

impl AppState {
    pub fn new(repos: SharedRepositories, mailer: Arc<dyn Mailer>, operator_address: String) -> Self {
        let project_handler = ProjectHandler::new(repos.project_repo.clone());
        let document_handler = DocumentHandler::new(repos.document_repo.clone());
        let contact_handler = ContactMessageHandler::new(
            repos.contact_repo.clone(),
            mailer,
            operator_address,
        );

        AppState {
            project_handler,
            document_handler,
            contact_handler,
            repos,
        }
    }
}
