use super::{hotelsite_id, resolve_authors};
use crate::db::{HotelsiteStore, Storage, UserStore};
use crate::errors::ApiError;
use crate::forms::{HotelsiteFilter, HotelsiteForm, HotelsitePatch};
use crate::{models, views};
use bson::oid::ObjectId;
use std::sync::Arc;

#[derive(Clone)]
pub struct HotelsiteService {
    hotelsites: Arc<dyn HotelsiteStore>,
    users: Arc<dyn UserStore>,
}

impl HotelsiteService {
    pub fn new(storage: &Storage) -> Self {
        Self {
            hotelsites: storage.hotelsites.clone(),
            users: storage.users.clone(),
        }
    }

    /// Hotelsites matching `filter` with comment authors resolved. One user
    /// lookup covers the whole result.
    pub async fn list(&self, filter: HotelsiteFilter) -> Result<Vec<views::Hotelsite>, ApiError> {
        let filter = filter.into_document().map_err(ApiError::BadRequest)?;
        let hotelsites = self.hotelsites.fetch_many(filter).await?;

        let mut author_ids: Vec<ObjectId> = vec![];
        for id in hotelsites.iter().flat_map(models::Hotelsite::author_ids) {
            if !author_ids.contains(&id) {
                author_ids.push(id);
            }
        }
        let authors = resolve_authors(self.users.as_ref(), &author_ids).await?;

        Ok(hotelsites
            .iter()
            .map(|hotelsite| views::Hotelsite::populated(hotelsite, &authors))
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<views::Hotelsite, ApiError> {
        let hotelsite = self
            .hotelsites
            .fetch(&hotelsite_id(id)?)
            .await?
            .ok_or_else(|| ApiError::hotelsite_not_found(id))?;
        let authors = resolve_authors(self.users.as_ref(), &hotelsite.author_ids()).await?;

        Ok(views::Hotelsite::populated(&hotelsite, &authors))
    }

    pub async fn create(&self, form: HotelsiteForm) -> Result<views::Hotelsite, ApiError> {
        let hotelsite = self.hotelsites.insert(form.into()).await?;
        Ok(hotelsite.into())
    }

    /// Merges the fields present in `patch`; comments are never touched here.
    pub async fn update(
        &self,
        id: &str,
        patch: HotelsitePatch,
    ) -> Result<views::Hotelsite, ApiError> {
        self.hotelsites
            .update_fields(&hotelsite_id(id)?, patch.into_document())
            .await?
            .map(Into::into)
            .ok_or_else(|| ApiError::hotelsite_not_found(id))
    }

    pub async fn delete(&self, id: &str) -> Result<views::Hotelsite, ApiError> {
        self.hotelsites
            .delete(&hotelsite_id(id)?)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApiError::hotelsite_not_found(id))
    }

    pub async fn delete_all(&self) -> Result<views::DeleteResult, ApiError> {
        let deleted_count = self.hotelsites.delete_all().await?;
        tracing::info!("Deleted {} hotelsites", deleted_count);
        Ok(views::DeleteResult { deleted_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryDb;
    use std::collections::HashMap;

    fn service() -> HotelsiteService {
        HotelsiteService::new(&Storage::from_backend(Arc::new(MemoryDb::default())))
    }

    fn form(name: &str, featured: bool) -> HotelsiteForm {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "description": "Rooms with a view",
            "city": "Porto",
            "cost": 95.5,
            "featured": featured,
        }))
        .unwrap()
    }

    fn filter(pairs: &[(&str, &str)]) -> HotelsiteFilter {
        HotelsiteFilter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[tokio::test]
    async fn list_filters_by_cast_values() {
        let service = service();
        service.create(form("A", true)).await.unwrap();
        service.create(form("B", false)).await.unwrap();

        assert_eq!(service.list(filter(&[])).await.unwrap().len(), 2);

        let featured = service.list(filter(&[("featured", "true")])).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].name, "A");

        let cheap = service.list(filter(&[("cost", "95.5")])).await.unwrap();
        assert_eq!(cheap.len(), 2);

        let err = service
            .list(filter(&[("featured", "maybe")]))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn update_merges_and_reports_missing() {
        let service = service();
        let created = service.create(form("A", false)).await.unwrap();

        let patch: HotelsitePatch = serde_json::from_str(r#"{"city": "Lisbon"}"#).unwrap();
        let updated = service.update(&created.id, patch).await.unwrap();
        assert_eq!(updated.city.as_deref(), Some("Lisbon"));
        assert_eq!(updated.name, "A");

        let patch: HotelsitePatch = serde_json::from_str(r#"{"featured": true}"#).unwrap();
        let err = service
            .update(&ObjectId::new().to_hex(), patch)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_name_conflicts() {
        let service = service();
        service.create(form("A", false)).await.unwrap();
        let err = service.create(form("A", true)).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));

        let other = service.create(form("B", false)).await.unwrap();
        let patch: HotelsitePatch = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        let err = service.update(&other.id, patch).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn delete_returns_the_removed_document() {
        let service = service();
        let created = service.create(form("A", false)).await.unwrap();
        service.create(form("B", false)).await.unwrap();

        let removed = service.delete(&created.id).await.unwrap();
        assert_eq!(removed.id, created.id);

        let err = service.get(&created.id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Hotelsite {} not found", created.id));
        assert!(service.delete("not-an-id").await.is_err());

        assert_eq!(service.delete_all().await.unwrap().deleted_count, 1);
        assert!(service.list(filter(&[])).await.unwrap().is_empty());
    }
}
