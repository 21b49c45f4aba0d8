use crate::db::Storage;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::middleware::access::{Admin, Verified};
use crate::services::CommentService;
use actix_web::{delete, web, Responder, Result};

/// Bulk removal is a moderation action and skips the ownership check.
#[tracing::instrument(name = "Clear comments.", skip(storage, admin), fields(user = %admin.id))]
#[delete("/{id}/comments")]
pub async fn list(
    admin: Admin,
    path: web::Path<(String,)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let hid = path.into_inner().0;
    let hotelsite = CommentService::new(&storage).clear(&hid).await?;

    Ok(JsonResponse::build()
        .set_id(hid)
        .set_item(hotelsite)
        .ok("Comments deleted"))
}

#[tracing::instrument(name = "Delete comment.", skip(storage, user), fields(user = %user.id))]
#[delete("/{id}/comments/{cid}")]
pub async fn item(
    user: Verified,
    path: web::Path<(String, String)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let (hid, cid) = path.into_inner();
    let hotelsite = CommentService::new(&storage)
        .delete(&hid, &cid, &user.id)
        .await?;

    Ok(JsonResponse::build()
        .set_id(hid)
        .set_item(hotelsite)
        .ok("Comment deleted"))
}
