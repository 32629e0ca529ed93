use async_trait::async_trait;

use crate::{entities::notification::OutgoingEmail, errors::NotificationError};

/// Outbound email channel used for contact notifications.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message. Implementations make a single attempt.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotificationError>;

    /// Whether sends can succeed at all. Reported by the health endpoint.
    fn is_enabled(&self) -> bool {
        true
    }
}
