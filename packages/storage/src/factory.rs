use std::sync::Arc;

use folio_config::Config;
use tracing::info;

use crate::{FileStore, SharedStore, StorageResult};

/// Open the file backend described by `config`
pub fn open_store(config: &Config) -> StorageResult<SharedStore> {
    let store = FileStore::open(&config.storage_dir)?.with_quota(config.storage_quota_bytes);
    info!(
        "Opened Folio storage at {:?} (quota: {:?} bytes)",
        store.root(),
        config.storage_quota_bytes
    );
    Ok(Arc::new(store))
}
