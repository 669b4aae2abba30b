use std::collections::HashMap;

use crate::web::error::AppError;

pub mod core;
pub mod login;
pub mod reports;
pub mod students;

/// Present fields pass through unchanged, empty strings included.
pub(crate) fn required_field<'a>(
    fields: &'a HashMap<String, String>,
    key: &'static str,
) -> Result<&'a str, AppError> {
    fields
        .get(key)
        .map(String::as_str)
        .ok_or(AppError::MissingField(key))
}
