use super::mongo::MongoDb;
use super::StoreError;
use crate::models::User;
use bson::{doc, oid::ObjectId};
use futures_util::TryStreamExt as _;

#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch(&self, id: &ObjectId) -> Result<Option<User>, StoreError>;

    /// Unknown ids are skipped.
    async fn fetch_many(&self, ids: &[ObjectId]) -> Result<Vec<User>, StoreError>;
}

#[async_trait::async_trait]
impl UserStore for MongoDb {
    async fn fetch(&self, id: &ObjectId) -> Result<Option<User>, StoreError> {
        self.users()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch user, error: {:?}", err);
                err.into()
            })
    }

    async fn fetch_many(&self, ids: &[ObjectId]) -> Result<Vec<User>, StoreError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }
        let cursor = self.users().find(doc! { "_id": { "$in": ids.to_vec() } }).await?;
        Ok(cursor.try_collect().await?)
    }
}
