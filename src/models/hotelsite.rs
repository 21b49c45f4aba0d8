use super::Comment;
use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level listing document. It owns its comment sequence: comments are
/// appended, changed and removed here and persisted only by saving the
/// whole hotelsite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotelsite {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Hotelsite {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = super::now();
        Self {
            id: ObjectId::new(),
            name: name.into(),
            description: description.into(),
            image: None,
            city: None,
            cost: None,
            featured: false,
            comments: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn comment(&self, id: &ObjectId) -> Option<&Comment> {
        self.comments.iter().find(|comment| &comment.id == id)
    }

    pub fn comment_mut(&mut self, id: &ObjectId) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|comment| &comment.id == id)
    }

    /// Appends at the end of the sequence.
    pub fn push_comment(&mut self, comment: Comment) -> &Comment {
        self.comments.push(comment);
        self.touch();
        &self.comments[self.comments.len() - 1]
    }

    pub fn remove_comment(&mut self, id: &ObjectId) -> Option<Comment> {
        let position = self.comments.iter().position(|comment| &comment.id == id)?;
        let removed = self.comments.remove(position);
        self.touch();
        Some(removed)
    }

    /// Drops every comment, last one first. Returns how many were removed.
    pub fn clear_comments(&mut self) -> usize {
        let mut removed = 0;
        while self.comments.pop().is_some() {
            removed += 1;
        }
        self.touch();
        removed
    }

    /// Distinct comment authors in order of first appearance.
    pub fn author_ids(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = Vec::with_capacity(self.comments.len());
        for comment in &self.comments {
            if !ids.contains(&comment.author) {
                ids.push(comment.author);
            }
        }
        ids
    }

    pub fn touch(&mut self) {
        self.updated_at = super::now();
    }
}
