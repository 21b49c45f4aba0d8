//! Extractors that gate handlers on who the caller is.

use crate::errors::ApiError;
use crate::models;
use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

fn current_user(req: &HttpRequest) -> Result<Arc<models::User>, ApiError> {
    req.extensions()
        .get::<Arc<models::User>>()
        .cloned()
        .ok_or_else(|| ApiError::Unauthorized("You are not authenticated!".to_string()))
}

/// Any authenticated user.
#[derive(Debug, Clone)]
pub struct Verified(pub Arc<models::User>);

impl Deref for Verified {
    type Target = models::User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Verified {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(current_user(req).map(Verified))
    }
}

/// An authenticated user carrying the admin flag.
#[derive(Debug, Clone)]
pub struct Admin(pub Arc<models::User>);

impl Deref for Admin {
    type Target = models::User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for Admin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let admin = current_user(req).and_then(|user| {
            if user.admin {
                Ok(Admin(user))
            } else {
                Err(ApiError::Forbidden(
                    "You are not authorized to perform this operation!".to_string(),
                ))
            }
        });
        ready(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn request_as(user: Option<models::User>) -> HttpRequest {
        let req = TestRequest::default().to_http_request();
        if let Some(user) = user {
            req.extensions_mut().insert(Arc::new(user));
        }
        req
    }

    #[actix_web::test]
    async fn anonymous_is_unauthorized() {
        let req = request_as(None);
        let err = Verified::extract(&req).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized(_)));
    }

    #[actix_web::test]
    async fn plain_user_is_not_admin() {
        let req = request_as(Some(models::User::new("alice")));
        assert_eq!(Verified::extract(&req).await.unwrap().username, "alice");

        let err = Admin::extract(&req).await.unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }

    #[actix_web::test]
    async fn admin_flag_grants_admin() {
        let mut user = models::User::new("root");
        user.admin = true;
        let req = request_as(Some(user));
        assert!(Admin::extract(&req).await.is_ok());
    }
}
