use crate::errors::ApiError;
use actix_web::{post, put, HttpRequest, HttpResponse};

#[put("/{id}/comments")]
pub async fn list(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::unsupported(req.method().as_str(), req.path()))
}

#[post("/{id}/comments/{cid}")]
pub async fn item(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::unsupported(req.method().as_str(), req.path()))
}
