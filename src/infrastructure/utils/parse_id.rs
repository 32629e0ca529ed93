use crate::errors::AppError;

/// Parses an item id from the path. Anything that is not an integer cannot
/// name a stored row, so it is reported as not found.
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::NotFound(format!("{resource} not found")))
}
