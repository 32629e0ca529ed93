use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Category value clients send to mean "no filter".
pub const ALL_CATEGORIES: &str = "All";
