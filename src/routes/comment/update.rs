use crate::db::Storage;
use crate::errors::ApiError;
use crate::forms::CommentForm;
use crate::helpers::JsonResponse;
use crate::middleware::access::Verified;
use crate::services::CommentService;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Update comment.", skip(storage, user), fields(user = %user.id))]
#[put("/{id}/comments/{cid}")]
pub async fn item(
    user: Verified,
    path: web::Path<(String, String)>,
    form: web::Json<CommentForm>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    if let Err(errors) = form.validate() {
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let (hid, cid) = path.into_inner();
    let hotelsite = CommentService::new(&storage)
        .update(&hid, &cid, form.into_inner(), &user.id)
        .await?;

    Ok(JsonResponse::build()
        .set_id(hid)
        .set_item(hotelsite)
        .ok("Comment updated"))
}
