use crate::errors::ApiError;
use actix_web::{get, put, HttpRequest, HttpResponse};

#[put("")]
pub async fn list(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::unsupported(req.method().as_str(), req.path()))
}

#[get("/{hid}")]
pub async fn item(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::unsupported(req.method().as_str(), req.path()))
}

#[put("/{hid}")]
pub async fn item_put(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::unsupported(req.method().as_str(), req.path()))
}
