use serde;
use std::fmt;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub auth: AuthSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub uri: String,
    pub database_name: String,
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Which document store serves the collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

#[derive(Clone, serde::Deserialize)]
pub struct AuthSettings {
    pub jwt_secret: String,
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"***")
            .finish()
    }
}

impl AuthSettings {
    fn apply_env(&mut self) {
        if let Ok(secret) = std::env::var("HOTELSITE_JWT_SECRET") {
            self.jwt_secret = secret;
        }
    }
}

/// An empty origin list means every origin is accepted.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;
    config.auth.apply_env();

    Ok(config)
}
