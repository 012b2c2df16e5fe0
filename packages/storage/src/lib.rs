// ABOUTME: Key-value persistence layer for Folio
// ABOUTME: Storage contract, in-memory and file backends, JSON collection helpers

use std::sync::Arc;
use thiserror::Error;

pub mod collection;
pub mod factory;
pub mod file;
pub mod memory;

pub use collection::{
    read_collection, read_value, remove_value, try_read_collection, write_collection, write_value,
};
pub use factory::open_store;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage quota exceeded writing '{key}': {required} bytes required, quota is {quota}")]
    QuotaExceeded {
        key: String,
        required: usize,
        quota: usize,
    },
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
    #[error("Malformed data under '{key}': {reason}")]
    Malformed { key: String, reason: String },
    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Synchronous string-keyed store, the equivalent of browser local storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Backend shared by the project store, the archive and the session adapter
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Bytes a key/value pair counts against a quota
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

pub(crate) fn check_quota(
    key: &str,
    others: usize,
    value: &str,
    quota: Option<usize>,
) -> StorageResult<()> {
    if let Some(quota) = quota {
        let required = others + entry_size(key, value);
        if required > quota {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                required,
                quota,
            });
        }
    }
    Ok(())
}
