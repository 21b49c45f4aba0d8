use super::hotelsite_id;
use crate::db::{FavoriteStore, HotelsiteStore, Storage};
use crate::errors::ApiError;
use crate::forms::FavoriteItem;
use crate::helpers::parse_object_id;
use crate::{models, views};
use bson::oid::ObjectId;
use std::sync::Arc;

const NO_FAVORITES: &str = "You do not have any favorites";

/// Outcome of bookmarking a single hotelsite.
#[derive(Debug)]
pub enum Added {
    Added(views::Favorite),
    AlreadyPresent(views::Favorite),
}

#[derive(Clone)]
pub struct FavoriteService {
    favorites: Arc<dyn FavoriteStore>,
    hotelsites: Arc<dyn HotelsiteStore>,
}

impl FavoriteService {
    pub fn new(storage: &Storage) -> Self {
        Self {
            favorites: storage.favorites.clone(),
            hotelsites: storage.hotelsites.clone(),
        }
    }

    async fn populate(
        &self,
        favorite: &models::Favorite,
        user: &models::User,
    ) -> Result<views::Favorite, ApiError> {
        let hotelsites = self.hotelsites.fetch_by_ids(&favorite.hotelsites).await?;
        Ok(views::Favorite::populated(favorite, Some(user), &hotelsites))
    }

    async fn load_or_new(&self, user: &models::User) -> Result<models::Favorite, ApiError> {
        Ok(self
            .favorites
            .fetch_by_user(&user.id)
            .await?
            .unwrap_or_else(|| models::Favorite::new(user.id)))
    }

    pub async fn fetch(&self, user: &models::User) -> Result<views::Favorite, ApiError> {
        let favorite = self
            .favorites
            .fetch_by_user(&user.id)
            .await?
            .ok_or_else(|| ApiError::NotFound(NO_FAVORITES.to_string()))?;
        self.populate(&favorite, user).await
    }

    /// Appends every listed hotelsite not bookmarked yet, creating the list
    /// on first use.
    pub async fn add_many(
        &self,
        user: &models::User,
        items: Vec<FavoriteItem>,
    ) -> Result<views::Favorite, ApiError> {
        let ids = items
            .iter()
            .map(|item| {
                parse_object_id(&item.id)
                    .ok_or_else(|| ApiError::BadRequest(format!("Invalid hotelsite id {}", item.id)))
            })
            .collect::<Result<Vec<ObjectId>, ApiError>>()?;

        let mut favorite = self.load_or_new(user).await?;
        for id in ids {
            favorite.add(id);
        }
        let favorite = self.favorites.save(&favorite).await?;

        self.populate(&favorite, user).await
    }

    pub async fn delete_all(&self, user: &models::User) -> Result<views::Favorite, ApiError> {
        self.favorites
            .delete_by_user(&user.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApiError::NotFound("You do not have any favorites to delete".to_string()))
    }

    /// Bookmarks an existing hotelsite. Adding one twice is a no-op.
    pub async fn add_one(&self, user: &models::User, hid: &str) -> Result<Added, ApiError> {
        let id = hotelsite_id(hid)?;
        if self.hotelsites.fetch(&id).await?.is_none() {
            return Err(ApiError::hotelsite_not_found(hid));
        }

        let mut favorite = self.load_or_new(user).await?;
        if !favorite.add(id) {
            return Ok(Added::AlreadyPresent(self.populate(&favorite, user).await?));
        }
        let favorite = self.favorites.save(&favorite).await?;

        Ok(Added::Added(self.populate(&favorite, user).await?))
    }

    pub async fn remove_one(
        &self,
        user: &models::User,
        hid: &str,
    ) -> Result<views::Favorite, ApiError> {
        let mut favorite = self
            .favorites
            .fetch_by_user(&user.id)
            .await?
            .ok_or_else(|| ApiError::NotFound(NO_FAVORITES.to_string()))?;

        let removed = parse_object_id(hid).map_or(false, |id| favorite.remove(&id));
        if removed {
            favorite = self.favorites.save(&favorite).await?;
        }

        self.populate(&favorite, user).await
    }
}
