use super::{Authors, Ref, User};
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: Ref<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Author resolved from `authors`, falling back to the bare id.
    pub fn populated(comment: &models::Comment, authors: &Authors) -> Self {
        Self {
            author: Ref::user(&comment.author, authors),
            ..comment.into()
        }
    }
}

impl From<&models::Comment> for Comment {
    fn from(comment: &models::Comment) -> Self {
        Self {
            id: comment.id.to_hex(),
            author: Ref::Id(comment.author.to_hex()),
            rating: comment.rating,
            text: comment.text.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
