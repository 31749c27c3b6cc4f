use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Header carrying the admin secret on mutating endpoints.
pub const ADMIN_KEY_HEADER: &str = "x-api-key";
