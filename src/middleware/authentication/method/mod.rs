mod f_anonym;
mod f_cookie;
mod f_jwt;

pub use f_anonym::anonym;
pub use f_cookie::try_cookie;
pub use f_jwt::try_jwt;

use crate::configuration::Settings;
use crate::db::Storage;
use crate::errors::ApiError;
use crate::helpers::{jwt, parse_object_id};
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

/// Verifies `token`, loads its subject and attaches it to the request.
/// A token that does not check out leaves the caller anonymous; the
/// extractors on protected routes answer 401 from there.
async fn login_with_token(req: &mut ServiceRequest, token: &str) -> Result<bool, ApiError> {
    let settings = req
        .app_data::<web::Data<Settings>>()
        .ok_or_else(|| ApiError::StoreFailure("settings are not registered".to_string()))?
        .clone();
    let storage = req
        .app_data::<web::Data<Storage>>()
        .ok_or_else(|| ApiError::StoreFailure("storage is not registered".to_string()))?
        .clone();

    let claims = match jwt::verify_token(token, settings.auth.jwt_secret.as_bytes()) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!("JWT validation failed: {}", err);
            return Ok(false);
        }
    };

    let user_id = match parse_object_id(&claims.sub) {
        Some(user_id) => user_id,
        None => {
            tracing::warn!("JWT subject {} is not a user id", claims.sub);
            return Ok(false);
        }
    };
    let user = match storage.users.fetch(&user_id).await? {
        Some(user) => user,
        None => {
            tracing::warn!("JWT subject {} is not a known user", user_id);
            return Ok(false);
        }
    };

    tracing::debug!("authenticated user {}", user.username);
    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err(ApiError::Unauthorized("user already logged".to_string()));
    }

    Ok(true)
}
