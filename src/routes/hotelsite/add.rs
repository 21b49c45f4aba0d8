use crate::db::Storage;
use crate::errors::ApiError;
use crate::forms::HotelsiteForm;
use crate::helpers::JsonResponse;
use crate::middleware::access::Admin;
use crate::services::HotelsiteService;
use actix_web::{post, web, Responder, Result};
use serde_valid::Validate;

#[tracing::instrument(name = "Add hotelsite.", skip(storage, admin))]
#[post("")]
pub async fn item(
    admin: Admin,
    form: web::Json<HotelsiteForm>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    if let Err(errors) = form.validate() {
        return Err(ApiError::BadRequest(errors.to_string()));
    }

    let hotelsite = HotelsiteService::new(&storage)
        .create(form.into_inner())
        .await?;
    tracing::info!("Hotelsite {} created by {}", hotelsite.id, admin.username);

    Ok(JsonResponse::build()
        .set_id(hotelsite.id.clone())
        .set_item(hotelsite)
        .ok("Hotelsite created"))
}
