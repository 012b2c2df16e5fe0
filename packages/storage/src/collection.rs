// ABOUTME: JSON helpers for collections persisted under a single storage key
// ABOUTME: Read paths self-heal to empty state, write paths propagate every failure

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::{KeyValueStore, StorageError, StorageResult};

/// Strict read: missing key is an empty collection, unparsable data is `Malformed`
pub fn try_read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> StorageResult<Vec<T>> {
    let Some(content) = store.get(key)? else {
        debug!("No data stored under '{}'", key);
        return Ok(Vec::new());
    };

    // A stored `null` is what an unset browser key round-trips to
    let parsed: Option<Vec<T>> =
        serde_json::from_str(&content).map_err(|e| StorageError::Malformed {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
    let items = parsed.unwrap_or_default();
    debug!("Loaded {} entries from '{}'", items.len(), key);
    Ok(items)
}

/// Lenient read used by every load path: any failure yields an empty collection
pub fn read_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match try_read_collection(store, key) {
        Ok(items) => items,
        Err(e) => {
            warn!("Failed to load '{}', using an empty collection: {}", key, e);
            Vec::new()
        }
    }
}

/// Serialize and store a whole collection
pub fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> StorageResult<()> {
    let content = serde_json::to_string(items)?;
    store.set(key, &content).map_err(|e| {
        error!("Failed to write {} entries to '{}': {}", items.len(), key, e);
        e
    })?;
    debug!("Wrote {} entries to '{}'", items.len(), key);
    Ok(())
}

/// Lenient single-value read
pub fn read_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let content = match store.get(key) {
        Ok(content) => content?,
        Err(e) => {
            warn!("Failed to read '{}': {}", key, e);
            return None;
        }
    };
    match serde_json::from_str::<Option<T>>(&content) {
        Ok(value) => value,
        Err(e) => {
            warn!("Ignoring malformed value under '{}': {}", key, e);
            None
        }
    }
}

pub fn write_value<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> StorageResult<()> {
    let content = serde_json::to_string(value)?;
    store.set(key, &content)
}

pub fn remove_value(store: &dyn KeyValueStore, key: &str) -> StorageResult<()> {
    store.remove(key)
}
