mod comment;
mod favorite;
mod hotelsite;
mod user;

pub use comment::Comment;
pub use favorite::Favorite;
pub use hotelsite::Hotelsite;
pub use user::User;

use bson::oid::ObjectId;
use serde::Serialize;
use std::collections::HashMap;

/// Users looked up for display, keyed by id.
pub type Authors = HashMap<ObjectId, crate::models::User>;

/// A reference that is either resolved to the full document or left as the
/// stored id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Resolved(T),
    Id(String),
}

impl Ref<User> {
    pub fn user(id: &ObjectId, authors: &Authors) -> Self {
        match authors.get(id) {
            Some(user) => Ref::Resolved(user.into()),
            None => Ref::Id(id.to_hex()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteResult {
    pub deleted_count: u64,
}
