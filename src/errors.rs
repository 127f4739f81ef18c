use std::borrow::Cow;
use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};

const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Conflict(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().finish(),
            _ => {
                tracing::error!("Request failed: {}", self);
                HttpResponse::build(self.status_code())
                    .insert_header(ContentType::json())
                    .json(serde_json::json!({"error": "Internal server error"}))
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // A conflict that reaches the edge already failed its retry.
            AppError::Conflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn student_not_found(id: i32) -> Self {
        AppError::NotFound(format!("student {}", id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database row not found".into()),
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed(SERIALIZATION_FAILURE)) => {
                AppError::Conflict("Serialization failure".into())
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed(DEADLOCK_DETECTED)) => {
                AppError::Conflict("Deadlock detected".into())
            }
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}
