pub mod contact_message;
pub mod document;
pub mod mailer;
pub mod project;
pub mod sqlx_repo;
