use std::env;
use std::path::PathBuf;

use crate::errors::AppError;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_PHOTOS_DIRECTORY: &str = "public/uploads/photos";
const DEFAULT_PHOTOS_BASE_URL: &str = "/uploads/photos";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub database: Option<DatabaseConfig>,
    pub photos: PhotoConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Where uploaded photos are written and the public prefix they are served under.
#[derive(Debug, Clone)]
pub struct PhotoConfig {
    pub directory: PathBuf,
    pub base_url: String,
}

impl PhotoConfig {
    pub fn new(directory: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            directory: directory.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_url, file_name)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let database = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => {
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                        AppError::InternalServerError(format!(
                            "DATABASE_MAX_CONNECTIONS must be a positive integer, got '{}'",
                            raw
                        ))
                    })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                Some(DatabaseConfig { url, max_connections })
            }
            None => None,
        };

        let photos = PhotoConfig::new(
            lookup("PHOTOS_DIRECTORY").unwrap_or_else(|| DEFAULT_PHOTOS_DIRECTORY.to_string()),
            lookup("PHOTOS_BASE_URL").unwrap_or_else(|| DEFAULT_PHOTOS_BASE_URL.to_string()),
        );

        Ok(Self { bind_address, database, photos })
    }
}
