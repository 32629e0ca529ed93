use crate::constants::ALL_CATEGORIES;

/// Normalizes the `category` query parameter. Absent, empty, or `"All"`
/// means no filtering; any other value is matched exactly, case-sensitive.
pub fn category_filter(raw: Option<&str>) -> Option<&str> {
    raw.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
}
