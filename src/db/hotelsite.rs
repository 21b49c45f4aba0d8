use super::mongo::{write_error, MongoDb};
use super::StoreError;
use crate::models::Hotelsite;
use bson::{doc, oid::ObjectId, Document};
use futures_util::TryStreamExt as _;
use mongodb::options::ReturnDocument;
use std::future::IntoFuture;
use tracing::Instrument;

#[async_trait::async_trait]
pub trait HotelsiteStore: Send + Sync {
    async fn fetch(&self, id: &ObjectId) -> Result<Option<Hotelsite>, StoreError>;

    /// Equality filter on top-level fields; an empty filter matches everything.
    async fn fetch_many(&self, filter: Document) -> Result<Vec<Hotelsite>, StoreError>;

    /// Returns the hotelsites among `ids` that exist, in `ids` order.
    async fn fetch_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Hotelsite>, StoreError>;

    async fn insert(&self, hotelsite: Hotelsite) -> Result<Hotelsite, StoreError>;

    /// `$set` merge of `fields`; `None` when the document does not exist.
    async fn update_fields(
        &self,
        id: &ObjectId,
        fields: Document,
    ) -> Result<Option<Hotelsite>, StoreError>;

    /// Replaces the stored document, embedded comments included.
    /// `None` when the document was removed in the meantime.
    async fn save(&self, hotelsite: &Hotelsite) -> Result<Option<Hotelsite>, StoreError>;

    async fn delete(&self, id: &ObjectId) -> Result<Option<Hotelsite>, StoreError>;

    async fn delete_all(&self) -> Result<u64, StoreError>;
}

#[async_trait::async_trait]
impl HotelsiteStore for MongoDb {
    async fn fetch(&self, id: &ObjectId) -> Result<Option<Hotelsite>, StoreError> {
        tracing::info!("Fetch hotelsite {}", id);
        self.hotelsites()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|err| {
                tracing::error!("Failed to fetch hotelsite, error: {:?}", err);
                err.into()
            })
    }

    async fn fetch_many(&self, filter: Document) -> Result<Vec<Hotelsite>, StoreError> {
        let query_span = tracing::info_span!("Fetch hotelsites by filter.", filter = %filter);
        async move {
            let cursor = self.hotelsites().find(filter).await?;
            let hotelsites: Vec<Hotelsite> = cursor.try_collect().await?;
            Ok::<_, StoreError>(hotelsites)
        }
        .instrument(query_span)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch hotelsites, error: {:?}", err);
            err
        })
    }

    async fn fetch_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Hotelsite>, StoreError> {
        let cursor = self
            .hotelsites()
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?;
        let found: Vec<Hotelsite> = cursor.try_collect().await?;

        Ok(ids
            .iter()
            .filter_map(|id| found.iter().find(|hotelsite| &hotelsite.id == id).cloned())
            .collect())
    }

    async fn insert(&self, hotelsite: Hotelsite) -> Result<Hotelsite, StoreError> {
        let query_span = tracing::info_span!("Saving new hotelsite into the database");
        self.hotelsites()
            .insert_one(&hotelsite)
            .into_future()
            .instrument(query_span)
            .await
            .map_err(|err| write_error(err, "Hotelsite"))?;
        tracing::info!("Hotelsite {} created", hotelsite.id);

        Ok(hotelsite)
    }

    async fn update_fields(
        &self,
        id: &ObjectId,
        fields: Document,
    ) -> Result<Option<Hotelsite>, StoreError> {
        let query_span = tracing::info_span!("Updating hotelsite fields", %id);
        self.hotelsites()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .into_future()
            .instrument(query_span)
            .await
            .map_err(|err| write_error(err, "Hotelsite"))
    }

    async fn save(&self, hotelsite: &Hotelsite) -> Result<Option<Hotelsite>, StoreError> {
        let query_span = tracing::info_span!("Saving hotelsite", id = %hotelsite.id);
        let result = self
            .hotelsites()
            .replace_one(doc! { "_id": hotelsite.id }, hotelsite)
            .into_future()
            .instrument(query_span)
            .await
            .map_err(|err| write_error(err, "Hotelsite"))?;

        if result.matched_count == 0 {
            tracing::warn!("Hotelsite {} vanished before save", hotelsite.id);
            return Ok(None);
        }
        Ok(Some(hotelsite.clone()))
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<Hotelsite>, StoreError> {
        tracing::info!("Delete hotelsite {}", id);
        self.hotelsites()
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(|err| {
                tracing::error!("Failed to delete hotelsite, error: {:?}", err);
                err.into()
            })
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        tracing::info!("Delete all hotelsites");
        let result = self.hotelsites().delete_many(doc! {}).await?;
        Ok(result.deleted_count)
    }
}
