use crate::errors::ApiError;
use crate::helpers::jwt::extract_bearer_token;
use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;

#[tracing::instrument(name = "Authenticate with JWT", skip(req))]
pub async fn try_jwt(req: &mut ServiceRequest) -> Result<bool, ApiError> {
    let authorization = match get_header::<String>(req, "authorization") {
        Ok(Some(authorization)) => authorization,
        Ok(None) => return Ok(false),
        Err(err) => {
            tracing::warn!("{}", err);
            return Ok(false);
        }
    };

    let token = match extract_bearer_token(&authorization) {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!("{}", err);
            return Ok(false);
        }
    };

    super::login_with_token(req, token).await
}
