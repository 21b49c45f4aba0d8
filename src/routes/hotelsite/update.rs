use crate::db::Storage;
use crate::errors::ApiError;
use crate::forms::HotelsitePatch;
use crate::helpers::JsonResponse;
use crate::middleware::access::Admin;
use crate::services::HotelsiteService;
use actix_web::{put, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Update hotelsite.", skip(storage, _admin))]
#[put("/{id}")]
pub async fn item(
    _admin: Admin,
    path: web::Path<(String,)>,
    form: web::Json<HotelsitePatch>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    if let Err(errors) = form.validate() {
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let id = path.into_inner().0;
    let hotelsite = HotelsiteService::new(&storage)
        .update(&id, form.into_inner())
        .await?;

    Ok(JsonResponse::build()
        .set_id(id)
        .set_item(hotelsite)
        .ok("Hotelsite updated"))
}
