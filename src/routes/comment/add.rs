use crate::db::Storage;
use crate::errors::ApiError;
use crate::forms::CommentForm;
use crate::helpers::JsonResponse;
use crate::middleware::access::Verified;
use crate::services::CommentService;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add comment.", skip(storage, user), fields(user = %user.id))]
#[post("/{id}/comments")]
pub async fn item(
    user: Verified,
    path: web::Path<(String,)>,
    form: web::Json<CommentForm>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    if let Err(errors) = form.validate() {
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let hid = path.into_inner().0;
    let hotelsite = CommentService::new(&storage)
        .add(&hid, form.into_inner(), &user.id)
        .await?;

    Ok(JsonResponse::build()
        .set_id(hid)
        .set_item(hotelsite)
        .ok("Comment added"))
}
