//! Durable key-value backends
//!
//! The record list lives under a single key; backends only have to move
//! whole string values in and out.

mod file;
mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use crate::errors::{LocalShortError, Result};

/// Synchronous string key-value storage
///
/// Values are replaced wholesale on every write; there are no partial
/// updates.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// Keys double as file names, so keep them to a safe charset
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key.len() <= 128
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

    if valid {
        Ok(())
    } else {
        Err(LocalShortError::storage(format!(
            "invalid storage key: '{}'",
            key
        )))
    }
}
