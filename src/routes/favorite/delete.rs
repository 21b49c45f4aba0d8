use crate::db::Storage;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::middleware::access::Verified;
use crate::services::FavoriteService;
use actix_web::{delete, web, Responder, Result};

#[tracing::instrument(name = "Delete favorites.", skip(storage, user), fields(user = %user.id))]
#[delete("")]
pub async fn list(user: Verified, storage: web::Data<Storage>) -> Result<impl Responder, ApiError> {
    let favorite = FavoriteService::new(&storage).delete_all(&user).await?;

    Ok(JsonResponse::build()
        .set_id(favorite.id.clone())
        .set_item(favorite)
        .ok("Favorites deleted"))
}

#[tracing::instrument(name = "Remove favorite.", skip(storage, user), fields(user = %user.id))]
#[delete("/{hid}")]
pub async fn item(
    user: Verified,
    path: web::Path<(String,)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let hid = path.into_inner().0;
    let favorite = FavoriteService::new(&storage)
        .remove_one(&user, &hid)
        .await?;

    Ok(JsonResponse::build()
        .set_id(favorite.id.clone())
        .set_item(favorite)
        .ok("Favorite removed"))
}
