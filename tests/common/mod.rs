#![allow(dead_code)]

use hotelsite::configuration::{
    AuthSettings, CorsSettings, DatabaseSettings, Settings, StoreBackend,
};
use hotelsite::db::{HotelsiteStore, MemoryDb, Storage};
use hotelsite::helpers::jwt::{issue_token, JwtClaims};
use hotelsite::models;
use std::net::TcpListener;
use std::sync::Arc;

const JWT_SECRET: &str = "integration-secret";

pub struct TestApp {
    pub address: String,
    pub db: Arc<MemoryDb>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn seed_user(&self, username: &str, admin: bool) -> models::User {
        let mut user = models::User::new(username);
        user.admin = admin;
        self.db.insert_user(user).await
    }

    pub async fn seed_hotelsite(&self, name: &str) -> models::Hotelsite {
        let store: &dyn HotelsiteStore = &*self.db;
        store
            .insert(models::Hotelsite::new(name, "Seeded for tests"))
            .await
            .expect("Failed to seed hotelsite")
    }

    pub async fn stored_hotelsite(&self, id: &bson::oid::ObjectId) -> Option<models::Hotelsite> {
        let store: &dyn HotelsiteStore = &*self.db;
        store.fetch(id).await.expect("Failed to fetch hotelsite")
    }

    pub async fn hotelsite_count(&self) -> usize {
        let store: &dyn HotelsiteStore = &*self.db;
        store
            .fetch_many(bson::Document::new())
            .await
            .expect("Failed to list hotelsites")
            .len()
    }

    pub fn token_for(&self, user: &models::User) -> String {
        let claims = JwtClaims::new(user.id.to_hex(), 3600);
        issue_token(&claims, JWT_SECRET.as_bytes()).expect("Failed to issue token")
    }
}

pub fn test_settings() -> Settings {
    Settings {
        database: DatabaseSettings {
            uri: String::new(),
            database_name: "hotelsites".to_string(),
            backend: StoreBackend::Memory,
        },
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        auth: AuthSettings {
            jwt_secret: JWT_SECRET.to_string(),
        },
        cors: CorsSettings::default(),
    }
}

pub async fn spawn_app() -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let db = Arc::new(MemoryDb::default());
    let storage = Storage::from_backend(db.clone());

    let server = hotelsite::startup::run(listener, storage, test_settings())
        .await
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        db,
        client: reqwest::Client::new(),
    }
}
