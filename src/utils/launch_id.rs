//! Launch id validation.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

static LAUNCH_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

/// Checks that `id` can be sent to the detail query.
///
/// Upstream ids are short alphanumeric strings; anything else is rejected
/// before a request is made.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the id is empty, longer than 64
/// characters, or contains characters outside `[A-Za-z0-9_-]`.
pub fn validate_launch_id(id: &str) -> Result<(), AppError> {
    if LAUNCH_ID_REGEX.is_match(id) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Invalid launch id",
            json!({ "id": id.chars().take(80).collect::<String>() }),
        ))
    }
}
