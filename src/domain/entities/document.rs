use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::{
    entities::{
        non_blank,
        option_fields::{validate_not_null, OptionField},
        MAX_CATEGORY_LENGTH, MAX_SHORT_LENGTH, MAX_TITLE_LENGTH, MAX_URL_LENGTH,
    },
    errors::AppError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// File kind shown to visitors, e.g. "PDF".
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub doc_type: String,
    pub category: String,
    pub file_url: String,
    /// Human readable, e.g. "2.4 MB".
    pub size: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub title: String,
    pub description: String,
    pub doc_type: String,
    pub category: String,
    pub file_url: String,
    pub size: String,
}

/// Body of `POST /documents` and `PUT /documents/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DocumentForm {
    #[validate(required, custom(function = "non_blank"), length(max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(required, custom(function = "non_blank"))]
    pub description: Option<String>,

    #[serde(rename = "type")]
    #[validate(required, custom(function = "non_blank"), length(max = MAX_SHORT_LENGTH))]
    pub doc_type: Option<String>,

    #[validate(required, custom(function = "non_blank"), length(max = MAX_CATEGORY_LENGTH))]
    pub category: Option<String>,

    #[validate(required, custom(function = "non_blank"), length(max = MAX_URL_LENGTH))]
    pub file_url: Option<String>,

    #[validate(required, custom(function = "non_blank"), length(max = MAX_SHORT_LENGTH))]
    pub size: Option<String>,
}

#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateDocumentRequest {
    #[validate(custom(function = "validate_not_null"))]
    pub title: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub description: OptionField<String>,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_not_null"))]
    pub doc_type: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub category: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub file_url: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub size: OptionField<String>,
}

/// Validation errors keyed by the JSON names clients send (`type`, not `doc_type`).
pub fn wire_errors(errors: ValidationErrors) -> AppError {
    AppError::from(errors).rename_field("doc_type", "type")
}

impl DocumentForm {
    pub fn validated(self) -> Result<NewDocument, AppError> {
        self.validate().map_err(wire_errors)?;

        Ok(NewDocument {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            doc_type: self.doc_type.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            file_url: self.file_url.unwrap_or_default(),
            size: self.size.unwrap_or_default(),
        })
    }
}

impl UpdateDocumentRequest {
    pub fn apply_to(self, current: Document) -> DocumentForm {
        DocumentForm {
            title: Some(self.title.resolve(current.title)),
            description: Some(self.description.resolve(current.description)),
            doc_type: Some(self.doc_type.resolve(current.doc_type)),
            category: Some(self.category.resolve(current.category)),
            file_url: Some(self.file_url.resolve(current.file_url)),
            size: Some(self.size.resolve(current.size)),
        }
    }
}

impl NewDocument {
    pub fn into_document(self, id: i64) -> Document {
        Document {
            id,
            title: self.title,
            description: self.description,
            doc_type: self.doc_type,
            category: self.category,
            file_url: self.file_url,
            size: self.size,
        }
    }
}
