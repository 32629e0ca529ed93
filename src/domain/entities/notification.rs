use serde::Serialize;

/// One message handed to the notification channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub subject: String,
    pub body: String,
    pub from: String,
    pub to: String,
}

/// Advisory half of a contact submission. Never affects the HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationOutcome {
    Sent,
    Failed(String),
}
