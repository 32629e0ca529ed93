use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::{
    entities::{
        contact_message::{ContactMessage, ContactMessageForm, ContactSubmission, UpdateContactMessageRequest},
        notification::NotificationOutcome,
    },
    errors::AppError,
    repositories::{contact_message::ContactMessageRepository, mailer::Mailer},
    utils::parse_id::parse_id,
};

pub struct ContactMessageHandler<R, M>
where
    R: ContactMessageRepository + ?Sized,
    M: Mailer + ?Sized,
{
    pub contact_repo: Arc<R>,
    pub mailer: Arc<M>,
    operator_address: String,
}

impl<R, M> ContactMessageHandler<R, M>
where
    R: ContactMessageRepository + ?Sized,
    M: Mailer + ?Sized,
{
    pub fn new(contact_repo: Arc<R>, mailer: Arc<M>, operator_address: String) -> Self {
        ContactMessageHandler { contact_repo, mailer, operator_address }
    }

    /// Stores a contact message, then notifies the operator.
    ///
    /// Only the insert decides the result. A failed notification is logged
    /// and reported in `ContactSubmission::notification`; it never turns the
    /// submission into an error and is not retried.
    pub async fn create_contact_message(
        &self,
        form: ContactMessageForm
    ) -> Result<ContactSubmission, AppError> {
        let request = form.validated()?;

        let message = self.contact_repo.create_contact_message(&request).await?;
        let notification = self.notify_operator(&message).await;

        Ok(ContactSubmission { message, notification })
    }

    async fn notify_operator(&self, message: &ContactMessage) -> NotificationOutcome {
        let email = message.notification_email(&self.operator_address);

        match self.mailer.send(&email).await {
            Ok(()) => {
                info!(contact_message_id = message.id, "Contact notification sent");
                NotificationOutcome::Sent
            }
            Err(e) => {
                warn!(contact_message_id = message.id, error = %e, "Failed to send contact notification");
                NotificationOutcome::Failed(e.to_string())
            }
        }
    }

    /// Retrieves a contact message by its ID
    pub async fn get_contact_message_by_id(&self, id: &str) -> Result<ContactMessage, AppError> {
        let valid_id = parse_id(id, "Contact message")?;
        self.contact_repo
            .get_contact_message_by_id(valid_id)
            .await
            .map_err(not_found)
    }

    /// Lists all contact messages
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }

    pub async fn replace_contact_message(
        &self,
        id: &str,
        form: ContactMessageForm
    ) -> Result<ContactMessage, AppError> {
        let valid_id = parse_id(id, "Contact message")?;
        let request = form.validated()?;

        self.contact_repo
            .update_contact_message(valid_id, &request)
            .await
            .map_err(not_found)
    }

    pub async fn update_contact_message(
        &self,
        id: &str,
        patch: UpdateContactMessageRequest
    ) -> Result<ContactMessage, AppError> {
        let valid_id = parse_id(id, "Contact message")?;
        patch.validate()?;

        let current = self.contact_repo
            .get_contact_message_by_id(valid_id)
            .await
            .map_err(not_found)?;

        let merged = patch.apply_to(current).validated()?;

        self.contact_repo
            .update_contact_message(valid_id, &merged)
            .await
            .map_err(not_found)
    }

    /// Deletes a contact message by its ID
    pub async fn delete_contact_message(&self, id: &str) -> Result<(), AppError> {
        let valid_id = parse_id(id, "Contact message")?;
        self.contact_repo
            .delete_contact_message(valid_id)
            .await
            .map_err(not_found)
    }
}

fn not_found(e: AppError) -> AppError {
    match e {
        AppError::NotFound(_) => AppError::NotFound("Contact message not found".to_string()),
        _ => e,
    }
}
