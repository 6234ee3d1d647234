use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    DuplicateEmail(String),
    NotFound(String),
    InternalServerError(String),
    DatabaseError(String),
    FileSystemError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    /// Message placed in the `error` field of the response body.
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::DuplicateEmail(msg)
            | AppError::NotFound(msg)
            | AppError::InternalServerError(msg)
            | AppError::FileSystemError(msg) => msg.clone(),
            AppError::DatabaseError(msg) => format!("An error occurred: {}", msg),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            AppError::DuplicateEmail(msg) => write!(f, "Duplicate Email: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database Error: {}", msg),
            AppError::FileSystemError(msg) => write!(f, "File System Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileSystemError(format!("An error occurred: {}", err))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::DuplicateEmail(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_)
            | AppError::DatabaseError(_)
            | AppError::FileSystemError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(status).json(ErrorResponse { error: self.message() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn duplicate_email_is_a_bad_request() {
        let err = AppError::DuplicateEmail("Email already exists".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Email already exists");
    }

    #[test]
    fn database_errors_carry_the_underlying_message() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().starts_with("An error occurred: "));
    }

    #[test]
    fn io_errors_map_to_internal_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::from(io);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "An error occurred: denied");
    }
}
