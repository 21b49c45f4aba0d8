use crate::db::Storage;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::services::CommentService;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "List comments.", skip(storage))]
#[get("/{id}/comments")]
pub async fn list(
    path: web::Path<(String,)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let hid = path.into_inner().0;
    let comments = CommentService::new(&storage).list(&hid).await?;

    Ok(JsonResponse::build().set_id(hid).set_list(comments).ok("OK"))
}

#[tracing::instrument(name = "Get comment.", skip(storage))]
#[get("/{id}/comments/{cid}")]
pub async fn item(
    path: web::Path<(String, String)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let (hid, cid) = path.into_inner();
    let comment = CommentService::new(&storage).get(&hid, &cid).await?;

    Ok(JsonResponse::build().set_id(cid).set_item(comment).ok("OK"))
}
