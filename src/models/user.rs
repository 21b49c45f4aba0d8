use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Users are provisioned elsewhere; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub admin: bool,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            admin: false,
        }
    }
}
