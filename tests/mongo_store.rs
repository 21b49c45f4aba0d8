//! Runs against a live MongoDB when `MONGODB_URI` is set; skipped otherwise.

use bson::doc;
use hotelsite::db::{FavoriteStore, HotelsiteStore, MongoDb, StoreError};
use hotelsite::models::{Comment, Favorite, Hotelsite};

async fn connect() -> Option<MongoDb> {
    let uri = match std::env::var("MONGODB_URI") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("Skipping test: MONGODB_URI is not set");
            return None;
        }
    };
    let db_name = format!("hotelsite_test_{}", uuid::Uuid::new_v4().simple());
    Some(
        MongoDb::connect(&uri, &db_name)
            .await
            .expect("Failed to connect to MongoDB"),
    )
}

#[tokio::test]
async fn hotelsite_round_trip() {
    let Some(db) = connect().await else {
        return;
    };
    let store: &dyn HotelsiteStore = &db;

    let mut hotelsite = store
        .insert(Hotelsite::new("Harbor Inn", "By the sea"))
        .await
        .unwrap();
    let err = store
        .insert(Hotelsite::new("Harbor Inn", "Again"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));

    let other = store
        .insert(Hotelsite::new("Hill Lodge", "Up the hill"))
        .await
        .unwrap();
    let err = store
        .update_fields(&other.id, doc! { "name": "Harbor Inn" })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));

    hotelsite.push_comment(Comment::new(bson::oid::ObjectId::new(), Some(3.0), None));
    let saved = store.save(&hotelsite).await.unwrap().unwrap();
    assert_eq!(saved.comments.len(), 1);
    assert_eq!(store.fetch(&hotelsite.id).await.unwrap(), Some(saved));

    let updated = store
        .update_fields(&hotelsite.id, doc! { "featured": true })
        .await
        .unwrap()
        .unwrap();
    assert!(updated.featured);
    assert_eq!(updated.comments.len(), 1);

    let featured = store.fetch_many(doc! { "featured": true }).await.unwrap();
    assert_eq!(featured.len(), 1);

    assert!(store.delete(&hotelsite.id).await.unwrap().is_some());
    assert!(store.save(&hotelsite).await.unwrap().is_none());
    assert_eq!(store.delete_all().await.unwrap(), 1);
}

#[tokio::test]
async fn favorite_upsert() {
    let Some(db) = connect().await else {
        return;
    };
    let store: &dyn FavoriteStore = &db;
    let user = bson::oid::ObjectId::new();

    let mut favorite = Favorite::new(user);
    favorite.add(bson::oid::ObjectId::new());
    store.save(&favorite).await.unwrap();
    favorite.add(bson::oid::ObjectId::new());
    store.save(&favorite).await.unwrap();

    let stored = store.fetch_by_user(&user).await.unwrap().unwrap();
    assert_eq!(stored.hotelsites.len(), 2);
    assert!(store.delete_by_user(&user).await.unwrap().is_some());
    assert!(store.fetch_by_user(&user).await.unwrap().is_none());
}
