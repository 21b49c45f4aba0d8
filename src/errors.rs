use crate::db::StoreError;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Failures a request can end with. Every variant carries the message sent
/// back to the caller; the status code follows from the variant.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Parent or child document absent (404)
    #[error("{0}")]
    NotFound(String),
    /// Ownership mismatch or a deliberately unsupported verb (403)
    #[error("{0}")]
    Forbidden(String),
    /// Missing or invalid credential (401)
    #[error("{0}")]
    Unauthorized(String),
    /// Malformed or invalid request body (400)
    #[error("{0}")]
    BadRequest(String),
    /// Unique key already taken (409)
    #[error("{0}")]
    Conflict(String),
    /// Any lower-level persistence error (500)
    #[error("{0}")]
    StoreFailure(String),
}

impl ApiError {
    pub fn hotelsite_not_found(id: &str) -> Self {
        Self::NotFound(format!("Hotelsite {} not found", id))
    }

    pub fn comment_not_found(id: &str) -> Self {
        Self::NotFound(format!("Comment {} not found", id))
    }

    pub fn unsupported(method: &str, path: &str) -> Self {
        Self::Forbidden(format!("{} operation not supported on {}", method, path))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // store details stay in the logs
        let message = match self {
            Self::StoreFailure(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(status).json(json!({
            "message": message,
            "code": status.as_u16(),
        }))
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(msg) => Self::Conflict(msg),
            err => {
                tracing::error!("Document store failure: {:?}", err);
                Self::StoreFailure(err.to_string())
            }
        }
    }
}
