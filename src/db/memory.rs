use super::{FavoriteStore, HotelsiteStore, StoreError, UserStore};
use crate::models::{Favorite, Hotelsite, User};
use bson::{oid::ObjectId, Document};
use tokio::sync::RwLock;

/// In-process document store. Every call takes the collection lock once, so
/// single operations are atomic; load-then-save sequences are not.
#[derive(Default)]
pub struct MemoryDb {
    hotelsites: RwLock<Vec<Hotelsite>>,
    users: RwLock<Vec<User>>,
    favorites: RwLock<Vec<Favorite>>,
}

impl MemoryDb {
    /// Users are provisioned outside the service; this seeds them.
    pub async fn insert_user(&self, user: User) -> User {
        let mut users = self.users.write().await;
        users.retain(|existing| existing.id != user.id);
        users.push(user.clone());
        user
    }
}

fn matches(hotelsite: &Hotelsite, filter: &Document) -> Result<bool, StoreError> {
    if filter.is_empty() {
        return Ok(true);
    }
    let document = bson::to_document(hotelsite)?;
    Ok(filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected)))
}

fn ensure_unique_name(hotelsites: &[Hotelsite], candidate: &Hotelsite) -> Result<(), StoreError> {
    let taken = hotelsites
        .iter()
        .any(|other| other.id != candidate.id && other.name == candidate.name);
    if taken {
        return Err(StoreError::Duplicate("Hotelsite already exists".to_string()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl HotelsiteStore for MemoryDb {
    async fn fetch(&self, id: &ObjectId) -> Result<Option<Hotelsite>, StoreError> {
        let hotelsites = self.hotelsites.read().await;
        Ok(hotelsites.iter().find(|hotelsite| &hotelsite.id == id).cloned())
    }

    async fn fetch_many(&self, filter: Document) -> Result<Vec<Hotelsite>, StoreError> {
        let hotelsites = self.hotelsites.read().await;
        let mut found = vec![];
        for hotelsite in hotelsites.iter() {
            if matches(hotelsite, &filter)? {
                found.push(hotelsite.clone());
            }
        }
        Ok(found)
    }

    async fn fetch_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Hotelsite>, StoreError> {
        let hotelsites = self.hotelsites.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| hotelsites.iter().find(|hotelsite| &hotelsite.id == id).cloned())
            .collect())
    }

    async fn insert(&self, hotelsite: Hotelsite) -> Result<Hotelsite, StoreError> {
        let mut hotelsites = self.hotelsites.write().await;
        ensure_unique_name(&hotelsites, &hotelsite)?;
        if hotelsites.iter().any(|existing| existing.id == hotelsite.id) {
            return Err(StoreError::Duplicate("Hotelsite already exists".to_string()));
        }
        hotelsites.push(hotelsite.clone());
        Ok(hotelsite)
    }

    async fn update_fields(
        &self,
        id: &ObjectId,
        fields: Document,
    ) -> Result<Option<Hotelsite>, StoreError> {
        let mut hotelsites = self.hotelsites.write().await;
        let position = match hotelsites.iter().position(|hotelsite| &hotelsite.id == id) {
            Some(position) => position,
            None => return Ok(None),
        };

        let mut document = bson::to_document(&hotelsites[position])?;
        for (key, value) in fields {
            document.insert(key, value);
        }
        let updated: Hotelsite = bson::from_document(document)?;
        ensure_unique_name(&hotelsites, &updated)?;
        hotelsites[position] = updated.clone();

        Ok(Some(updated))
    }

    async fn save(&self, hotelsite: &Hotelsite) -> Result<Option<Hotelsite>, StoreError> {
        let mut hotelsites = self.hotelsites.write().await;
        ensure_unique_name(&hotelsites, hotelsite)?;
        match hotelsites.iter_mut().find(|stored| stored.id == hotelsite.id) {
            Some(stored) => {
                *stored = hotelsite.clone();
                Ok(Some(hotelsite.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &ObjectId) -> Result<Option<Hotelsite>, StoreError> {
        let mut hotelsites = self.hotelsites.write().await;
        Ok(hotelsites
            .iter()
            .position(|hotelsite| &hotelsite.id == id)
            .map(|position| hotelsites.remove(position)))
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut hotelsites = self.hotelsites.write().await;
        let deleted = hotelsites.len() as u64;
        hotelsites.clear();
        Ok(deleted)
    }
}

#[async_trait::async_trait]
impl UserStore for MemoryDb {
    async fn fetch(&self, id: &ObjectId) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|user| &user.id == id).cloned())
    }

    async fn fetch_many(&self, ids: &[ObjectId]) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl FavoriteStore for MemoryDb {
    async fn fetch_by_user(&self, user: &ObjectId) -> Result<Option<Favorite>, StoreError> {
        let favorites = self.favorites.read().await;
        Ok(favorites.iter().find(|favorite| &favorite.user == user).cloned())
    }

    async fn save(&self, favorite: &Favorite) -> Result<Favorite, StoreError> {
        let mut favorites = self.favorites.write().await;
        if favorites
            .iter()
            .any(|other| other.id != favorite.id && other.user == favorite.user)
        {
            return Err(StoreError::Duplicate("Favorite already exists".to_string()));
        }
        match favorites.iter_mut().find(|stored| stored.id == favorite.id) {
            Some(stored) => *stored = favorite.clone(),
            None => favorites.push(favorite.clone()),
        }
        Ok(favorite.clone())
    }

    async fn delete_by_user(&self, user: &ObjectId) -> Result<Option<Favorite>, StoreError> {
        let mut favorites = self.favorites.write().await;
        Ok(favorites
            .iter()
            .position(|favorite| &favorite.user == user)
            .map(|position| favorites.remove(position)))
    }
}
