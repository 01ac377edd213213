use std::sync::Arc;

use tracing::debug;

use crate::config::StorageConfig;

pub mod backend;
pub mod models;

pub use backend::{FileKvStore, KeyValueStore, MemoryKvStore};
pub use models::{
    SerializableShortenedUrl, ShortenedUrl, deserialize_urls, parse_created_at, serialize_urls,
};

pub struct StorageFactory;

impl StorageFactory {
    /// Build the durable backend described by the storage config
    pub fn create(config: &StorageConfig) -> Arc<dyn KeyValueStore> {
        let storage = FileKvStore::new(config.data_dir.clone());
        debug!(
            "Using storage backend: {} ({})",
            storage.backend_name(),
            storage.data_dir().display()
        );
        Arc::new(storage)
    }
}
