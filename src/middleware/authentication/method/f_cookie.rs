use crate::errors::ApiError;
use crate::middleware::authentication::get_header;
use actix_web::dev::ServiceRequest;

const TOKEN_COOKIE: &str = "access_token";

fn find_token(cookies: &str) -> Option<&str> {
    cookies.split(';').find_map(|cookie| {
        let (name, value) = cookie.trim().split_once('=')?;
        (name == TOKEN_COOKIE && !value.is_empty()).then_some(value)
    })
}

#[tracing::instrument(name = "Authenticate with cookie", skip(req))]
pub async fn try_cookie(req: &mut ServiceRequest) -> Result<bool, ApiError> {
    let cookies = match get_header::<String>(req, "cookie") {
        Ok(Some(cookies)) => cookies,
        Ok(None) => return Ok(false),
        Err(err) => {
            tracing::warn!("{}", err);
            return Ok(false);
        }
    };
    let token = match find_token(&cookies) {
        Some(token) => token.to_string(),
        None => return Ok(false),
    };

    tracing::debug!("Found access_token in cookies");
    super::login_with_token(req, &token).await
}
