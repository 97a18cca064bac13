//! URL builders for the activities endpoints
//!
//! Activity names go into a path segment and emails into a query value, so
//! both are percent-encoded.

use urlencoding::encode;

/// Strip the trailing slash so joins never produce `//`
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

pub fn catalog_url(base: &str) -> String {
    format!("{}/activities", normalize_base(base))
}

pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        normalize_base(base),
        encode(activity),
        encode(email)
    )
}

pub fn participants_url(base: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants?email={}",
        normalize_base(base),
        encode(activity),
        encode(email)
    )
}
