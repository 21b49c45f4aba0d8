//! Comment sub-resource of a hotelsite.
//!
//! Comments only exist inside their hotelsite. Every operation loads the
//! parent fresh, mutates its comment sequence in memory and saves the whole
//! document back, so concurrent writers race with last-write-wins.
//!
//! Existence is checked parent first, then the comment, then ownership.

use super::{hotelsite_id, resolve_authors};
use crate::db::{HotelsiteStore, Storage, UserStore};
use crate::errors::ApiError;
use crate::forms::CommentForm;
use crate::helpers::parse_object_id;
use crate::{models, views};
use bson::oid::ObjectId;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommentService {
    hotelsites: Arc<dyn HotelsiteStore>,
    users: Arc<dyn UserStore>,
}

impl CommentService {
    pub fn new(storage: &Storage) -> Self {
        Self {
            hotelsites: storage.hotelsites.clone(),
            users: storage.users.clone(),
        }
    }

    async fn load_parent(&self, hid: &str) -> Result<models::Hotelsite, ApiError> {
        let id = hotelsite_id(hid)?;
        self.hotelsites
            .fetch(&id)
            .await?
            .ok_or_else(|| ApiError::hotelsite_not_found(hid))
    }

    async fn persist(&self, hotelsite: &models::Hotelsite) -> Result<views::Hotelsite, ApiError> {
        // the parent can vanish between load and save
        let saved = self
            .hotelsites
            .save(hotelsite)
            .await?
            .ok_or_else(|| ApiError::hotelsite_not_found(&hotelsite.id.to_hex()))?;
        Ok(saved.into())
    }

    pub async fn list(&self, hid: &str) -> Result<Vec<views::Comment>, ApiError> {
        let hotelsite = self.load_parent(hid).await?;
        let authors = resolve_authors(self.users.as_ref(), &hotelsite.author_ids()).await?;

        Ok(hotelsite
            .comments
            .iter()
            .map(|comment| views::Comment::populated(comment, &authors))
            .collect())
    }

    /// Appends a comment authored by `author`.
    pub async fn add(
        &self,
        hid: &str,
        form: CommentForm,
        author: &ObjectId,
    ) -> Result<views::Hotelsite, ApiError> {
        let mut hotelsite = self.load_parent(hid).await?;
        let comment_id = hotelsite.push_comment(form.into_comment(*author)).id;
        tracing::info!("Comment {} added to hotelsite {}", comment_id, hid);

        self.persist(&hotelsite).await
    }

    /// Drops every comment regardless of who wrote it.
    pub async fn clear(&self, hid: &str) -> Result<views::Hotelsite, ApiError> {
        let mut hotelsite = self.load_parent(hid).await?;
        let removed = hotelsite.clear_comments();
        tracing::info!("Removed {} comments from hotelsite {}", removed, hid);

        self.persist(&hotelsite).await
    }

    pub async fn get(&self, hid: &str, cid: &str) -> Result<views::Comment, ApiError> {
        let hotelsite = self.load_parent(hid).await?;
        let comment = find_comment(&hotelsite, cid)?;
        let authors = resolve_authors(self.users.as_ref(), &[comment.author]).await?;

        Ok(views::Comment::populated(comment, &authors))
    }

    /// Only the author may update. Absent form fields keep their value; the
    /// parent is saved even when nothing changed.
    pub async fn update(
        &self,
        hid: &str,
        cid: &str,
        form: CommentForm,
        caller: &ObjectId,
    ) -> Result<views::Hotelsite, ApiError> {
        let mut hotelsite = self.load_parent(hid).await?;
        let id = owned_comment(&hotelsite, cid, caller, "modify")?;
        if let Some(comment) = hotelsite.comment_mut(&id) {
            form.update(comment);
        }
        hotelsite.touch();

        self.persist(&hotelsite).await
    }

    pub async fn delete(
        &self,
        hid: &str,
        cid: &str,
        caller: &ObjectId,
    ) -> Result<views::Hotelsite, ApiError> {
        let mut hotelsite = self.load_parent(hid).await?;
        let id = owned_comment(&hotelsite, cid, caller, "delete")?;
        hotelsite.remove_comment(&id);
        tracing::info!("Comment {} removed from hotelsite {}", cid, hid);

        self.persist(&hotelsite).await
    }
}

fn find_comment<'a>(
    hotelsite: &'a models::Hotelsite,
    cid: &str,
) -> Result<&'a models::Comment, ApiError> {
    parse_object_id(cid)
        .and_then(|id| hotelsite.comment(&id))
        .ok_or_else(|| ApiError::comment_not_found(cid))
}

/// Id of the comment `cid` if `caller` wrote it.
fn owned_comment(
    hotelsite: &models::Hotelsite,
    cid: &str,
    caller: &ObjectId,
    action: &str,
) -> Result<ObjectId, ApiError> {
    let comment = find_comment(hotelsite, cid)?;
    if !comment.is_authored_by(caller) {
        tracing::warn!("User {} tried to {} comment {}", caller, action, cid);
        return Err(ApiError::Forbidden(format!(
            "You are not authorized to {} this comment!",
            action
        )));
    }
    Ok(comment.id)
}
