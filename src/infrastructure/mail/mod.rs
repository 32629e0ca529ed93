use std::sync::Arc;

use crate::{repositories::mailer::Mailer, settings::AppConfig};

pub mod smtp;

use smtp::{DisabledMailer, SmtpMailer};

/// Builds the notification channel and the operator address it reports to.
/// Misconfiguration degrades to `DisabledMailer` instead of aborting startup.
pub fn build_mailer(config: &AppConfig) -> (Arc<dyn Mailer>, String) {
    let Some(settings) = config.mail_settings() else {
        tracing::warn!("SMTP not configured; contact notifications are disabled");
        return (Arc::new(DisabledMailer), String::new());
    };

    match SmtpMailer::new(&settings) {
        Ok(mailer) => {
            tracing::info!(
                smtp_host = %settings.smtp_host,
                smtp_port = settings.smtp_port,
                "Contact notifications enabled"
            );
            (Arc::new(mailer), settings.operator_address)
        }
        Err(e) => {
            tracing::error!("SMTP transport error: {}", e);
            (Arc::new(DisabledMailer), settings.operator_address)
        }
    }
}
