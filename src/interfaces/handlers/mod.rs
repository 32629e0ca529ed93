pub mod contact_messages;
pub mod documents;
pub mod home;
pub mod projects;
pub mod system;
