use super::StoreError;
use crate::models::{Favorite, Hotelsite, User};
use bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

pub(crate) const HOTELSITES: &str = "hotelsites";
pub(crate) const USERS: &str = "users";
pub(crate) const FAVORITES: &str = "favorites";

const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoDb {
    _client: Client,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 }).await?;

        let mongo = MongoDb {
            _client: client,
            db,
        };
        mongo.ensure_indexes().await?;
        tracing::info!("Connected to MongoDB database {}", db_name);

        Ok(mongo)
    }

    async fn ensure_indexes(&self) -> Result<(), StoreError> {
        self.hotelsites()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "name": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await?;
        self.favorites()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "user": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build(),
            )
            .await?;
        Ok(())
    }

    pub(crate) fn hotelsites(&self) -> Collection<Hotelsite> {
        self.db.collection(HOTELSITES)
    }

    pub(crate) fn users(&self) -> Collection<User> {
        self.db.collection(USERS)
    }

    pub(crate) fn favorites(&self) -> Collection<Favorite> {
        self.db.collection(FAVORITES)
    }
}

/// Turns unique index violations into `StoreError::Duplicate`. Plain writes
/// report them as a write error, `findAndModify` as a command error.
pub(crate) fn write_error(err: mongodb::error::Error, what: &str) -> StoreError {
    let code = match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref failure)) => Some(failure.code),
        ErrorKind::Command(ref command) => Some(command.code),
        _ => None,
    };
    if code == Some(DUPLICATE_KEY) {
        return StoreError::Duplicate(format!("{} already exists", what));
    }
    tracing::error!("Failed to write {}, error: {:?}", what, err);
    StoreError::Mongo(err)
}
