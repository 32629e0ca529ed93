use serde::{Deserialize, Deserializer, Serialize};
use validator::ValidationError;

use crate::entities::new_validation_error;

/// Represents optional field semantics in PATCH requests.
///
/// - `Unchanged` → field absent from the body
/// - `SetToNull` → explicitly null
/// - `SetToValue` → set to provided value
///
/// Use with `#[serde(default)]` on the field so absent keys stay `Unchanged`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            None => OptionField::SetToNull,
            Some(value) => OptionField::SetToValue(value),
        })
    }
}

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// True when `SetToNull`.
    pub fn is_set_to_null(&self) -> bool {
        matches!(self, Self::SetToNull)
    }

    /// Merge into a required field. `SetToNull` is rejected earlier by
    /// `validate_not_null`, so it keeps the current value here.
    pub fn resolve(self, current: T) -> T {
        match self {
            OptionField::SetToValue(v) => v,
            OptionField::Unchanged | OptionField::SetToNull => current,
        }
    }

    /// Merge into a nullable field.
    pub fn resolve_nullable(self, current: Option<T>) -> Option<T> {
        match self {
            OptionField::Unchanged => current,
            OptionField::SetToNull => None,
            OptionField::SetToValue(v) => Some(v),
        }
    }
}

pub fn validate_not_null<T>(value: &OptionField<T>) -> Result<(), ValidationError> {
    if value.is_set_to_null() {
        return Err(new_validation_error("null", "This field may not be null."));
    }
    Ok(())
}
