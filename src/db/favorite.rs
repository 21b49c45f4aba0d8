use super::mongo::{write_error, MongoDb};
use super::StoreError;
use crate::models::Favorite;
use bson::{doc, oid::ObjectId};

#[async_trait::async_trait]
pub trait FavoriteStore: Send + Sync {
    async fn fetch_by_user(&self, user: &ObjectId) -> Result<Option<Favorite>, StoreError>;

    /// Inserts or replaces the document.
    async fn save(&self, favorite: &Favorite) -> Result<Favorite, StoreError>;

    async fn delete_by_user(&self, user: &ObjectId) -> Result<Option<Favorite>, StoreError>;
}

#[async_trait::async_trait]
impl FavoriteStore for MongoDb {
    async fn fetch_by_user(&self, user: &ObjectId) -> Result<Option<Favorite>, StoreError> {
        tracing::info!("Fetch favorites of user {}", user);
        Ok(self.favorites().find_one(doc! { "user": user }).await?)
    }

    async fn save(&self, favorite: &Favorite) -> Result<Favorite, StoreError> {
        self.favorites()
            .replace_one(doc! { "_id": favorite.id }, favorite)
            .upsert(true)
            .await
            .map_err(|err| write_error(err, "Favorite"))?;
        Ok(favorite.clone())
    }

    async fn delete_by_user(&self, user: &ObjectId) -> Result<Option<Favorite>, StoreError> {
        tracing::info!("Delete favorites of user {}", user);
        Ok(self
            .favorites()
            .find_one_and_delete(doc! { "user": user })
            .await?)
    }
}
