//! Record store
//!
//! Holds the authoritative, most-recent-first list of shortened URLs for a
//! session and mirrors it into a single durable key-value entry.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::storage::{KeyValueStore, ShortenedUrl, deserialize_urls, serialize_urls};

pub struct RecordStore {
    backend: Arc<dyn KeyValueStore>,
    key: String,
    urls: Vec<ShortenedUrl>,
    loaded: bool,
    watch_tx: watch::Sender<Vec<ShortenedUrl>>,
}

impl RecordStore {
    /// Create an unloaded, empty store. Storage is not touched until `load()`.
    pub fn new(backend: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let (watch_tx, _) = watch::channel(Vec::new());
        Self {
            backend,
            key: key.into(),
            urls: Vec::new(),
            loaded: false,
            watch_tx,
        }
    }

    /// Hydrate the list from durable storage
    ///
    /// Runs once per store; later calls do nothing. Any failure leaves the
    /// list empty and is only logged. The loaded flag is set either way.
    pub fn load(&mut self) {
        if self.loaded {
            debug!("RecordStore already loaded, ignoring load()");
            return;
        }

        self.urls = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => match deserialize_urls(&raw) {
                Ok(urls) => {
                    info!("Loaded {} shortened URLs from '{}'", urls.len(), self.key);
                    urls
                }
                Err(e) => {
                    error!("Error loading URLs: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored entry under '{}', starting empty", self.key);
                Vec::new()
            }
            Err(e) => {
                error!("Error loading URLs: {}", e);
                Vec::new()
            }
        };

        self.loaded = true;
        self.publish();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Prepend a record, making it the most recent
    pub fn add(&mut self, url: ShortenedUrl) {
        debug!("Adding shortened URL {} -> {}", url.id, url.original_url);
        self.urls.insert(0, url);
        self.changed();
    }

    /// Remove every record with this id. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.urls.len();
        self.urls.retain(|url| url.id != id);
        let removed = self.urls.len() != before;
        if removed {
            debug!("Deleted shortened URL {}", id);
        } else {
            debug!("delete({}) matched nothing", id);
        }
        self.changed();
        removed
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} shortened URLs", self.urls.len());
        self.urls.clear();
        self.changed();
    }

    pub fn urls(&self) -> &[ShortenedUrl] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.urls.iter().any(|url| url.id == id)
    }

    /// Watch the current list; the receiver sees every change, including the load
    pub fn subscribe(&self) -> watch::Receiver<Vec<ShortenedUrl>> {
        self.watch_tx.subscribe()
    }

    fn changed(&mut self) {
        self.publish();
        if self.loaded {
            self.sync();
        } else {
            warn!("RecordStore mutated before load(); change kept in memory only");
        }
    }

    fn publish(&self) {
        self.watch_tx.send_replace(self.urls.clone());
    }

    /// Rewrite the durable entry from the in-memory list
    fn sync(&self) {
        let result = serialize_urls(&self.urls)
            .and_then(|json| self.backend.set_item(&self.key, &json));
        match result {
            Ok(()) => debug!("Saved {} shortened URLs to '{}'", self.urls.len(), self.key),
            Err(e) => error!("Error saving URLs: {}", e),
        }
    }
}
