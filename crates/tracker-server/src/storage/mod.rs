//! Storage layer
//!
//! Two backends implement the `UserStore` and `ExerciseStore` ports:
//! SQLite (embedded) for durable data and DashMap (in-memory) for
//! throwaway instances.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryStore;

use crate::config::{ServerConfig, StorageBackend};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracker_core::{ExerciseStore, UserStore};

/// Both record collections, usually backed by the same store
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub exercises: Arc<dyn ExerciseStore>,
}

impl Stores {
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: UserStore + ExerciseStore + 'static,
    {
        Self {
            users: store.clone(),
            exercises: store,
        }
    }
}

/// Open the backend selected by the configuration
pub async fn open(config: &ServerConfig) -> Result<Stores> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage, data is lost on restart");
            Ok(Stores::shared(Arc::new(MemoryStore::new())))
        }
        StorageBackend::Sqlite => {
            let db = Database::new(&config.database_path)
                .await
                .context("Failed to initialize database")?;
            Ok(Stores::shared(Arc::new(db)))
        }
    }
}
