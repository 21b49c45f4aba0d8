//! Document store access.
//!
//! Each collection is reached through a store trait so handlers never depend
//! on a particular backend. `MongoDb` serves production, `MemoryDb` keeps
//! everything in process for tests and local runs.

pub mod favorite;
pub mod hotelsite;
pub mod memory;
pub mod mongo;
pub mod user;

pub use favorite::FavoriteStore;
pub use hotelsite::HotelsiteStore;
pub use memory::MemoryDb;
pub use mongo::MongoDb;
pub use user::UserStore;

use crate::configuration::{DatabaseSettings, StoreBackend};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("could not encode document: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("could not decode document: {0}")]
    Decode(#[from] bson::de::Error),
    /// Unique index violation
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    Other(String),
}

/// Handles to every collection, shared by all workers.
#[derive(Clone)]
pub struct Storage {
    pub hotelsites: Arc<dyn HotelsiteStore>,
    pub users: Arc<dyn UserStore>,
    pub favorites: Arc<dyn FavoriteStore>,
}

impl Storage {
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: HotelsiteStore + UserStore + FavoriteStore + 'static,
    {
        Self {
            hotelsites: backend.clone(),
            users: backend.clone(),
            favorites: backend,
        }
    }

    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        match settings.backend {
            StoreBackend::Mongo => {
                let db = MongoDb::connect(&settings.uri, &settings.database_name).await?;
                Ok(Self::from_backend(Arc::new(db)))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store, data is lost on restart");
                Ok(Self::from_backend(Arc::new(MemoryDb::default())))
            }
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Storage")
    }
}
