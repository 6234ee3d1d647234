use actix_web::error::{JsonPayloadError, PathError};
use actix_web::HttpRequest;
use log::debug;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        debug!("Payload rejected: {}", err);
        AppError::InvalidInput("Invalid data".to_string())
    })
}

/// Parses a raw request body, for handlers that must check other state before the body.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        debug!("JSON body rejected: {}", err);
        AppError::InvalidInput("Invalid data".to_string())
    })
}

/// Reports unreadable JSON bodies in the same `{"error": ...}` shape as every other failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("JSON body rejected: {}", err);
    AppError::InvalidInput("Invalid data".to_string()).into()
}

/// A path id that is not an integer cannot name a stored employee.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Path rejected: {}", err);
    AppError::NotFound("Employee not found".to_string()).into()
}
