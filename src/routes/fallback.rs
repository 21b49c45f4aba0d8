use crate::errors::ApiError;
use actix_web::{http::Method, HttpRequest, HttpResponse};

/// Answers requests no route matched. Pre-flight requests that reach this
/// far still get a success status.
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    Err(ApiError::NotFound(format!(
        "Cannot {} {}",
        req.method(),
        req.path()
    )))
}
