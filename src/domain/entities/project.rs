use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    entities::{
        non_blank,
        option_fields::{validate_not_null, OptionField},
        MAX_CATEGORY_LENGTH, MAX_TITLE_LENGTH, MAX_URL_LENGTH,
    },
    errors::AppError,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

/// Validated row ready for insert or full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
}

// ───── Input & Validation Requests ──────────────────────────────────

/// Body of `POST /projects` and `PUT /projects/{id}`. Required fields are
/// optional here so every missing one is reported at once.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProjectForm {
    #[validate(required, custom(function = "non_blank"), length(max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    #[validate(required, custom(function = "non_blank"))]
    pub description: Option<String>,

    #[validate(required, custom(function = "non_blank"), length(max = MAX_CATEGORY_LENGTH))]
    pub category: Option<String>,

    #[validate(required, custom(function = "non_blank"))]
    pub image: Option<String>,

    pub technologies: Option<Vec<String>>,

    #[validate(length(max = MAX_URL_LENGTH))]
    pub link: Option<String>,

    #[validate(length(max = MAX_URL_LENGTH))]
    pub github: Option<String>,
}

/// Body of `PATCH /projects/{id}`.
#[derive(Debug, Deserialize, Validate, Default)]
#[serde(default)]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "validate_not_null"))]
    pub title: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub description: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub category: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub image: OptionField<String>,

    #[validate(custom(function = "validate_not_null"))]
    pub technologies: OptionField<Vec<String>>,

    pub link: OptionField<String>,

    pub github: OptionField<String>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl ProjectForm {
    pub fn validated(self) -> Result<NewProject, AppError> {
        self.validate()?;

        Ok(NewProject {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            technologies: self.technologies.unwrap_or_default(),
            link: self.link,
            github: self.github,
        })
    }
}

impl UpdateProjectRequest {
    /// Overlays the patch on the stored project. The result goes through the
    /// same validation as a full replace.
    pub fn apply_to(self, current: Project) -> ProjectForm {
        ProjectForm {
            title: Some(self.title.resolve(current.title)),
            description: Some(self.description.resolve(current.description)),
            category: Some(self.category.resolve(current.category)),
            image: Some(self.image.resolve(current.image)),
            technologies: Some(self.technologies.resolve(current.technologies)),
            link: self.link.resolve_nullable(current.link),
            github: self.github.resolve_nullable(current.github),
        }
    }
}

impl NewProject {
    pub fn into_project(self, id: i64) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            image: self.image,
            technologies: self.technologies,
            link: self.link,
            github: self.github,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(err: AppError) -> Vec<String> {
        match err {
            AppError::ValidationError(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn every_missing_field_is_reported() {
        let form = ProjectForm { image: Some("x".into()), ..Default::default() };
        assert_eq!(fields(form.validated().unwrap_err()), vec!["category", "description", "title"]);
    }

    #[test]
    fn whitespace_only_is_blank() {
        let form = ProjectForm {
            title: Some("   ".into()),
            description: Some("d".into()),
            category: Some("Web".into()),
            image: Some("\t".into()),
            ..Default::default()
        };
        assert_eq!(fields(form.validated().unwrap_err()), vec!["image", "title"]);
    }

    #[test]
    fn optional_fields_default() {
        let form = ProjectForm {
            title: Some("A".into()),
            description: Some("d".into()),
            category: Some("Web".into()),
            image: Some("x".into()),
            ..Default::default()
        };
        let project = form.validated().unwrap();
        assert!(project.technologies.is_empty());
        assert_eq!(project.link, None);
    }
}
