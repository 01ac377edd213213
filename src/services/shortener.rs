//! Shortening service
//!
//! Turns raw user input into a validated record and hands it to the
//! [`RecordStore`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::ShortenerConfig;
use crate::errors::{LocalShortError, Result};
use crate::storage::ShortenedUrl;
use crate::store::RecordStore;
use crate::utils::generate_short_id;
use crate::utils::url_validator::{normalize_url, validate_url};

/// Attempts at finding an id not already in the list
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Source of short ids
pub trait IdSource: Send + Sync {
    fn next_id(&self, length: usize) -> String;
}

/// Uniformly random base-36 ids
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self, length: usize) -> String {
        generate_short_id(length)
    }
}

/// Pause applied before a submission completes
#[async_trait]
pub trait SubmitDelay: Send + Sync {
    async fn wait(&self);
}

/// Sleep on the tokio timer
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay(pub Duration);

#[async_trait]
impl SubmitDelay for TokioDelay {
    async fn wait(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Complete immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl SubmitDelay for NoDelay {
    async fn wait(&self) {}
}

/// Compose `<origin>/<id>`
pub fn build_short_url(origin: &str, id: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), id)
}

pub struct ShortenerService {
    origin: String,
    id_length: usize,
    ensure_unique_ids: bool,
    id_source: Box<dyn IdSource>,
    delay: Box<dyn SubmitDelay>,
}

impl ShortenerService {
    /// Service with random ids and the configured submit delay
    pub fn new(config: &ShortenerConfig) -> Self {
        Self {
            origin: config.origin.clone(),
            id_length: config.id_length.max(1),
            ensure_unique_ids: config.ensure_unique_ids,
            id_source: Box::new(RandomIdSource),
            delay: Box::new(TokioDelay(config.submit_delay())),
        }
    }

    pub fn with_id_source(mut self, id_source: impl IdSource + 'static) -> Self {
        self.id_source = Box::new(id_source);
        self
    }

    pub fn with_delay(mut self, delay: impl SubmitDelay + 'static) -> Self {
        self.delay = Box::new(delay);
        self
    }

    /// Shorten `input` and add the record to `store`
    ///
    /// - blank input: `Ok(None)`, nothing happens
    /// - unparseable after normalization: `Err(Validation)`, store untouched
    /// - otherwise the new record, already prepended to `store`
    pub async fn shorten(
        &self,
        store: &mut RecordStore,
        input: &str,
    ) -> Result<Option<ShortenedUrl>> {
        let Some(full_url) = normalize_url(input) else {
            debug!("Ignoring blank shorten request");
            return Ok(None);
        };

        if let Err(e) = validate_url(&full_url) {
            info!("Rejected URL '{}': {}", full_url, e);
            return Err(LocalShortError::invalid_url());
        }

        self.delay.wait().await;

        let id = self.next_id(store)?;
        let record = ShortenedUrl {
            short_url: build_short_url(&self.origin, &id),
            id,
            original_url: full_url,
            created_at: Utc::now(),
        };

        info!("Shortened {} -> {}", record.original_url, record.short_url);
        store.add(record.clone());
        Ok(Some(record))
    }

    fn next_id(&self, store: &RecordStore) -> Result<String> {
        if !self.ensure_unique_ids {
            return Ok(self.id_source.next_id(self.id_length));
        }

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.id_source.next_id(self.id_length);
            if !store.contains_id(&id) {
                return Ok(id);
            }
            warn!("Short id collision on '{}' (attempt {})", id, attempt);
        }

        Err(LocalShortError::id_exhausted(format!(
            "no free {}-character id after {} attempts",
            self.id_length, MAX_ID_ATTEMPTS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_short_url() {
        assert_eq!(
            build_short_url("http://localhost:3000", "abc123"),
            "http://localhost:3000/abc123"
        );
        assert_eq!(
            build_short_url("https://sho.rt/", "abc123"),
            "https://sho.rt/abc123"
        );
    }

    #[tokio::test]
    async fn test_tokio_delay_waits() {
        let start = tokio::time::Instant::now();
        TokioDelay(Duration::from_millis(20)).wait().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_random_id_source() {
        let id = RandomIdSource.next_id(6);
        assert!(crate::utils::is_valid_short_id(&id, 6));
    }
}
