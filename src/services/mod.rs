pub mod comment_service;
pub mod favorite_service;
pub mod hotelsite_service;

pub use comment_service::CommentService;
pub use favorite_service::FavoriteService;
pub use hotelsite_service::HotelsiteService;

use crate::db::UserStore;
use crate::errors::ApiError;
use crate::helpers::parse_object_id;
use crate::views::Authors;
use bson::oid::ObjectId;

/// Loads the users behind `ids` for display. Ids without a user are left out
/// and render as bare ids.
pub(crate) async fn resolve_authors(
    users: &dyn UserStore,
    ids: &[ObjectId],
) -> Result<Authors, ApiError> {
    if ids.is_empty() {
        return Ok(Authors::new());
    }

    let found = users.fetch_many(ids).await?;
    Ok(found.into_iter().map(|user| (user.id, user)).collect())
}

/// Malformed ids can never match a stored hotelsite.
pub(crate) fn hotelsite_id(id: &str) -> Result<ObjectId, ApiError> {
    parse_object_id(id).ok_or_else(|| ApiError::hotelsite_not_found(id))
}
