use crate::db::Storage;
use crate::errors::ApiError;
use crate::forms::HotelsiteFilter;
use crate::helpers::JsonResponse;
use crate::services::HotelsiteService;
use actix_web::{get, web, Responder, Result};

#[tracing::instrument(name = "List hotelsites.", skip(storage))]
#[get("")]
pub async fn list(
    filter: web::Query<HotelsiteFilter>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let hotelsites = HotelsiteService::new(&storage)
        .list(filter.into_inner())
        .await?;

    Ok(JsonResponse::build().set_list(hotelsites).ok("OK"))
}

#[tracing::instrument(name = "Get hotelsite.", skip(storage))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    storage: web::Data<Storage>,
) -> Result<impl Responder, ApiError> {
    let id = path.into_inner().0;
    let hotelsite = HotelsiteService::new(&storage).get(&id).await?;

    Ok(JsonResponse::build().set_id(id).set_item(hotelsite).ok("OK"))
}
