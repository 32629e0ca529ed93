pub mod category;
pub mod contact;
pub mod document;
pub mod extractors;
pub mod project;
