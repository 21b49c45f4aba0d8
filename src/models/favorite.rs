use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's bookmark list. Hotelsite ids keep insertion order and never repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub user: ObjectId,
    #[serde(default)]
    pub hotelsites: Vec<ObjectId>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user: ObjectId) -> Self {
        let now = super::now();
        Self {
            id: ObjectId::new(),
            user,
            hotelsites: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn contains(&self, hotelsite_id: &ObjectId) -> bool {
        self.hotelsites.contains(hotelsite_id)
    }

    /// Returns false when the hotelsite was already bookmarked.
    pub fn add(&mut self, hotelsite_id: ObjectId) -> bool {
        if self.contains(&hotelsite_id) {
            return false;
        }
        self.hotelsites.push(hotelsite_id);
        self.updated_at = super::now();
        true
    }

    pub fn remove(&mut self, hotelsite_id: &ObjectId) -> bool {
        let before = self.hotelsites.len();
        self.hotelsites.retain(|id| id != hotelsite_id);
        let removed = self.hotelsites.len() != before;
        if removed {
            self.updated_at = super::now();
        }
        removed
    }
}
