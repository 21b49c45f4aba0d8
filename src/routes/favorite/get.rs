use crate::db::Storage;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::middleware::access::Verified;
use crate::services::FavoriteService;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "Get favorites.", skip(storage, user), fields(user = %user.id))]
#[get("")]
pub async fn item(user: Verified, storage: web::Data<Storage>) -> Result<impl Responder, ApiError> {
    let favorite = FavoriteService::new(&storage).fetch(&user).await?;

    Ok(JsonResponse::build()
        .set_id(favorite.id.clone())
        .set_item(favorite)
        .ok("OK"))
}
