//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `tracker.toml` in the working directory, then unprefixed environment
//! variables matched case-insensitively (`STORAGE`, `DATABASE_PATH`, ...).
//! `PORT` overrides the listening port last.

use anyhow::{Context, Result};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

/// Which storage backend to open at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Ephemeral store, lost on restart
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub database_path: String,
    pub public_dir: PathBuf,
    pub views_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            storage: StorageBackend::Memory,
            database_path: "data/exercise_tracker.db".to_string(),
            public_dir: PathBuf::from("public"),
            views_dir: PathBuf::from("views"),
        }
    }
}

impl ServerConfig {
    /// Load from `tracker.toml` and the environment
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?
            .add_source(File::with_name("tracker").required(false))
            .add_source(Environment::default().try_parsing(true))
            .set_override_option("port", std::env::var("PORT").ok())
            .context("Invalid PORT override")?;

        Self::from_builder(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("storage", "memory")?
            .set_default("database_path", defaults.database_path)?
            .set_default("public_dir", defaults.public_dir.to_string_lossy().to_string())?
            .set_default("views_dir", defaults.views_dir.to_string_lossy().to_string())
            .context("Failed to set configuration defaults")
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Failed to parse configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn index_path(&self) -> PathBuf {
        self.views_dir.join("index.html")
    }
}
