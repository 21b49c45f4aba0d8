use crate::db::Storage;
use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::middleware::access::Admin;
use crate::services::HotelsiteService;
use crate::views;
use actix_web::{delete, web, Responder, Result};

#[tracing::instrument(name = "Delete all hotelsites.", skip(storage, admin))]
#[delete("")]
pub async fn list(admin: Admin, storage: web::Data<Storage>) -> Result<impl Responder, ApiError> {
    let result = HotelsiteService::new(&storage).delete_all().await?;
    tracing::warn!("User {} removed every hotelsite", admin.username);

    Ok(JsonResponse::<views::DeleteResult>::build()
        .set_item(result)
        .ok("Hotelsites deleted"))
}

#[tracing::instrument(name = "Delete hotelsite.", skip(storage, _admin))]
#[delete("/{id}")]
pub async fn item(
    _admin: Admin,
    path: web::Path<(String,)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let hotelsite = HotelsiteService::new(&storage).delete(&id).await?;

    Ok(JsonResponse::build()
        .set_id(id)
        .set_item(hotelsite)
        .ok("Hotelsite deleted"))
}
