use std::borrow::Cow;

use validator::ValidationError;

pub mod contact_message;
pub mod document;
pub mod notification;
pub mod option_fields;
pub mod project;

// Column limits shared by the persisted models.
pub const MAX_TITLE_LENGTH: u64 = 255;
pub const MAX_CATEGORY_LENGTH: u64 = 100;
pub const MAX_URL_LENGTH: u64 = 500;
pub const MAX_SHORT_LENGTH: u64 = 50;
pub const MAX_EMAIL_LENGTH: u64 = 254;

/// Rejects strings that are empty or only whitespace.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "This field may not be blank."));
    }
    Ok(())
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
