use crate::errors::ApiError;
use actix_web::dev::ServiceRequest;

#[tracing::instrument(name = "authenticate as anonym", skip(_req))]
pub fn anonym(_req: &mut ServiceRequest) -> Result<bool, ApiError> {
    Ok(true)
}
