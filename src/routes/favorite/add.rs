use crate::db::Storage;
use crate::errors::ApiError;
use crate::forms::FavoriteItem;
use crate::helpers::JsonResponse;
use crate::middleware::access::Verified;
use crate::services::favorite_service::Added;
use crate::services::FavoriteService;
use actix_web::{post, web, Responder, Result};

#[tracing::instrument(name = "Add favorites.", skip(storage, user), fields(user = %user.id))]
#[post("")]
pub async fn list(
    user: Verified,
    form: web::Json<Vec<FavoriteItem>>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let favorite = FavoriteService::new(&storage)
        .add_many(&user, form.into_inner())
        .await?;

    Ok(JsonResponse::build()
        .set_id(favorite.id.clone())
        .set_item(favorite)
        .ok("Favorites updated"))
}

#[tracing::instrument(name = "Add favorite.", skip(storage, user), fields(user = %user.id))]
#[post("/{hid}")]
pub async fn item(
    user: Verified,
    path: web::Path<(String,)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let hid = path.into_inner().0;
    let (favorite, message) = match FavoriteService::new(&storage).add_one(&user, &hid).await? {
        Added::Added(favorite) => (favorite, "Favorite added"),
        Added::AlreadyPresent(favorite) => {
            (favorite, "That hotelsite is already in the list of favorites!")
        }
    };

    Ok(JsonResponse::build()
        .set_id(favorite.id.clone())
        .set_item(favorite)
        .ok(message))
}
