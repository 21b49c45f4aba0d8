use super::{Authors, Comment};
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotelsite {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    pub featured: bool,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotelsite {
    pub fn populated(hotelsite: &models::Hotelsite, authors: &Authors) -> Self {
        Self {
            comments: hotelsite
                .comments
                .iter()
                .map(|comment| Comment::populated(comment, authors))
                .collect(),
            ..hotelsite.into()
        }
    }
}

impl From<&models::Hotelsite> for Hotelsite {
    fn from(hotelsite: &models::Hotelsite) -> Self {
        Self {
            id: hotelsite.id.to_hex(),
            name: hotelsite.name.clone(),
            description: hotelsite.description.clone(),
            image: hotelsite.image.clone(),
            city: hotelsite.city.clone(),
            cost: hotelsite.cost,
            featured: hotelsite.featured,
            comments: hotelsite.comments.iter().map(Into::into).collect(),
            created_at: hotelsite.created_at,
            updated_at: hotelsite.updated_at,
        }
    }
}

impl From<models::Hotelsite> for Hotelsite {
    fn from(hotelsite: models::Hotelsite) -> Self {
        (&hotelsite).into()
    }
}
