//! Registration payload validation

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while validating a registration payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Missing JSON in request")]
    MissingPayload,

    #[error("Missing username or password")]
    MissingCredentials,
}

/// Credentials pulled out of a registration payload, both guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validate a decoded registration payload
///
/// Rules, checked in order:
/// - The payload must be a non-empty JSON object
/// - `username` and `password` must both be non-empty strings
/// - `username` must not contain NUL, which no storage backend can key on
pub fn validate_registration(payload: Option<&Value>) -> Result<Credentials, UserValidationError> {
    let object = match payload {
        Some(Value::Object(object)) if !object.is_empty() => object,
        _ => return Err(UserValidationError::MissingPayload),
    };

    let username = required_string(object, "username").filter(|value| !value.contains('\0'));
    let password = required_string(object, "password");

    match (username, password) {
        (Some(username), Some(password)) => Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }),
        _ => Err(UserValidationError::MissingCredentials),
    }
}

fn required_string<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    object
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
