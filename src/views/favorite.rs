use super::{Hotelsite, Ref, User};
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Favorite {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: Ref<User>,
    pub hotelsites: Vec<Ref<Hotelsite>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Favorite {
    /// `hotelsites` holds the documents that still exist; bookmarks of
    /// removed hotelsites keep their bare id.
    pub fn populated(
        favorite: &models::Favorite,
        user: Option<&models::User>,
        hotelsites: &[models::Hotelsite],
    ) -> Self {
        Self {
            user: match user {
                Some(user) => Ref::Resolved(user.into()),
                None => Ref::Id(favorite.user.to_hex()),
            },
            hotelsites: favorite
                .hotelsites
                .iter()
                .map(|id| match hotelsites.iter().find(|hotelsite| &hotelsite.id == id) {
                    Some(hotelsite) => Ref::Resolved(hotelsite.into()),
                    None => Ref::Id(id.to_hex()),
                })
                .collect(),
            ..favorite.into()
        }
    }
}

impl From<&models::Favorite> for Favorite {
    fn from(favorite: &models::Favorite) -> Self {
        Self {
            id: favorite.id.to_hex(),
            user: Ref::Id(favorite.user.to_hex()),
            hotelsites: favorite
                .hotelsites
                .iter()
                .map(|id| Ref::Id(id.to_hex()))
                .collect(),
            created_at: favorite.created_at,
            updated_at: favorite.updated_at,
        }
    }
}

impl From<models::Favorite> for Favorite {
    fn from(favorite: models::Favorite) -> Self {
        (&favorite).into()
    }
}
