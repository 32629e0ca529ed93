use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        non_blank,
        notification::{NotificationOutcome, OutgoingEmail},
        option_fields::{validate_not_null, OptionField},
        MAX_EMAIL_LENGTH, MAX_TITLE_LENGTH,
    },
    errors::AppError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Validated row ready for insert or full replace. `created_at` is
/// assigned by storage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Body of `POST /contact-messages` and `PUT /contact-messages/{id}`.
/// A `created_at` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactMessageForm {
    #[validate(required, custom(function = "non_blank"), length(max = MAX_TITLE_LENGTH))]
    pub name: Option<String>,

    #[validate(required, email, length(max = MAX_EMAIL_LENGTH))]
    pub email: Option<String>,

    #[validate(required, custom(function = "non_blank"), length(max = MAX_TITLE_LENGTH))]
    pub subject: Option<String>,

    #[validate(required, custom(function = "non_blank"))]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateContactMessageRequest {
    #[validate(custom(function = "validate_not_null"))]
    pub name: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub email: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub subject: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub message: OptionField<String>,
}

/// Result of a create: the persisted row is authoritative, the notification
/// outcome is advisory.
#[derive(Debug)]
pub struct ContactSubmission {
    pub message: ContactMessage,
    pub notification: NotificationOutcome,
}

impl ContactMessageForm {
    pub fn validated(self) -> Result<NewContactMessage, AppError> {
        self.validate()?;

        Ok(NewContactMessage {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        })
    }
}

impl UpdateContactMessageRequest {
    pub fn apply_to(self, current: ContactMessage) -> ContactMessageForm {
        ContactMessageForm {
            name: Some(self.name.resolve(current.name)),
            email: Some(self.email.resolve(current.email)),
            subject: Some(self.subject.resolve(current.subject)),
            message: Some(self.message.resolve(current.message)),
        }
    }
}

impl NewContactMessage {
    pub fn into_contact_message(self, id: i64, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

impl ContactMessage {
    /// Email sent to the operator after a message is stored. The operator
    /// address is both sender and recipient.
    pub fn notification_email(&self, operator_address: &str) -> OutgoingEmail {
        OutgoingEmail {
            subject: format!("New Contact Message: {}", self.subject),
            body: format!(
                "You have received a new contact message.\n\n\
                 Name: {}\n\
                 Email: {}\n\
                 Subject: {}\n\n\
                 Message:\n{}\n",
                self.name, self.email, self.subject, self.message
            ),
            from: operator_address.to_string(),
            to: operator_address.to_string(),
        }
    }
}
