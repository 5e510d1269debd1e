//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::i18n::Locale;

/// URI scheme selecting the in-memory store instead of MongoDB.
pub const MEMORY_STORE_SCHEME: &str = "memory://";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Document store URI
    pub database_url: String,
    /// Database holding the student collection
    pub database_name: String,
    /// Student collection name
    pub collection_name: String,
    /// Directory of static front-end assets
    pub static_dir: PathBuf,
    /// Directory holding the landing page template
    pub views_dir: PathBuf,
    /// Language of user-facing messages
    pub locale: Locale,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DATABASE_URL` - store URI, `memory://` for the in-memory store
    ///   (default: mongodb://mongodb:27017)
    /// - `DATABASE_NAME` - database name (default: exampleDB)
    /// - `COLLECTION_NAME` - collection name (default: students)
    /// - `STATIC_DIR` - static asset directory (default: public)
    /// - `VIEWS_DIR` - template directory (default: views)
    /// - `APP_LOCALE` - `zh-TW` or `en` (default: zh-TW)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            database_name: env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            collection_name: env::var("COLLECTION_NAME").unwrap_or(defaults.collection_name),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            views_dir: env::var("VIEWS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.views_dir),
            locale: env::var("APP_LOCALE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.locale),
        }
    }

    /// Returns true if the in-memory store was requested.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url.starts_with(MEMORY_STORE_SCHEME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            database_url: "mongodb://mongodb:27017".to_string(),
            database_name: "exampleDB".to_string(),
            collection_name: "students".to_string(),
            static_dir: PathBuf::from("public"),
            views_dir: PathBuf::from("views"),
            locale: Locale::ZhTw,
        }
    }
}
