use folio_core::{generate_time_id, PORTFOLIOS_KEY};
use folio_storage::{read_collection, write_collection, SharedStore, StorageError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::artifact::PortfolioArtifact;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Portfolio not found: {0}")]
    NotFound(i64),
    #[error("No portfolio id left after {0}")]
    IdsExhausted(i64),
    #[error("Portfolio {0} already exists")]
    DuplicateId(i64),
    #[error("Storage write failed: {0}")]
    Storage(#[from] StorageError),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Append-only record of generated portfolios, oldest first
pub struct PortfolioArchive {
    backend: SharedStore,
    portfolios: Vec<PortfolioArtifact>,
}

impl PortfolioArchive {
    pub fn open(backend: SharedStore) -> Self {
        let mut archive = PortfolioArchive {
            backend,
            portfolios: Vec::new(),
        };
        archive.load();
        archive
    }

    /// Reload from the backend; missing or corrupt data reads as empty
    pub fn load(&mut self) -> &[PortfolioArtifact] {
        self.portfolios = read_collection(self.backend.as_ref(), PORTFOLIOS_KEY);
        debug!("Loaded {} portfolios", self.portfolios.len());
        &self.portfolios
    }

    pub fn portfolios(&self) -> &[PortfolioArtifact] {
        &self.portfolios
    }

    pub fn len(&self) -> usize {
        self.portfolios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portfolios.is_empty()
    }

    pub fn lookup(&self, id: i64) -> ArchiveResult<&PortfolioArtifact> {
        self.portfolios
            .iter()
            .find(|artifact| artifact.id == id)
            .ok_or(ArchiveError::NotFound(id))
    }

    /// Identifier for the next artifact, unique among those already archived
    pub fn next_id(&self) -> ArchiveResult<i64> {
        let last_id = self.portfolios.iter().map(|a| a.id).max();
        generate_time_id(last_id).ok_or(ArchiveError::IdsExhausted(last_id.unwrap_or_default()))
    }

    /// Add `artifact` after everything already persisted.
    ///
    /// Entries written by other handles on the same backend are kept: the
    /// persisted list is re-read before appending.
    pub fn append(&mut self, artifact: PortfolioArtifact) -> ArchiveResult<&PortfolioArtifact> {
        let mut next: Vec<PortfolioArtifact> =
            read_collection(self.backend.as_ref(), PORTFOLIOS_KEY);
        for existing in &self.portfolios {
            if !next.iter().any(|a| a.id == existing.id) {
                next.push(existing.clone());
            }
        }
        if next.iter().any(|a| a.id == artifact.id) {
            return Err(ArchiveError::DuplicateId(artifact.id));
        }

        let id = artifact.id;
        let title = artifact.title.clone();
        next.push(artifact);

        if let Err(e) = write_collection(self.backend.as_ref(), PORTFOLIOS_KEY, &next) {
            warn!("Portfolio {} not archived: {}", id, e);
            return Err(e.into());
        }
        self.portfolios = next;

        info!("Archived portfolio '{}' with ID {}", title, id);
        self.lookup(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_storage::{KeyValueStore, MemoryStore};
    use folio_templates::Template;
    use std::sync::Arc;

    fn artifact(id: i64, title: &str) -> PortfolioArtifact {
        PortfolioArtifact {
            id,
            title: title.to_string(),
            template_id: Template::Minimal,
            projects: Vec::new(),
            rendered_document: format!("<h1>{}</h1>", title),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_append_then_lookup() {
        let mut archive = PortfolioArchive::open(Arc::new(MemoryStore::new()));
        archive.append(artifact(1, "One")).unwrap();
        archive.append(artifact(2, "Two")).unwrap();

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.lookup(2).unwrap().title, "Two");
        assert_eq!(archive.portfolios()[0].id, 1);
        assert!(matches!(archive.lookup(3), Err(ArchiveError::NotFound(3))));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut archive = PortfolioArchive::open(Arc::new(MemoryStore::new()));
        archive.append(artifact(7, "First")).unwrap();
        let err = archive.append(artifact(7, "Second")).unwrap_err();
        assert!(matches!(err, ArchiveError::DuplicateId(7)));
        assert_eq!(archive.lookup(7).unwrap().title, "First");
    }

    #[test]
    fn test_append_keeps_entries_from_other_handles() {
        let backend: SharedStore = Arc::new(MemoryStore::new());
        let mut first = PortfolioArchive::open(backend.clone());
        let mut second = PortfolioArchive::open(backend.clone());

        first.append(artifact(1, "From first")).unwrap();
        second.append(artifact(2, "From second")).unwrap();

        let reopened = PortfolioArchive::open(backend);
        let ids: Vec<i64> = reopened.portfolios().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_next_id_is_past_existing() {
        let mut archive = PortfolioArchive::open(Arc::new(MemoryStore::new()));
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        archive.append(artifact(far_future, "Future")).unwrap();
        assert_eq!(archive.next_id().unwrap(), far_future + 1);
    }

    #[test]
    fn test_next_id_after_max_id_is_an_error() {
        let backend: SharedStore = Arc::new(MemoryStore::new());
        let mut archive = PortfolioArchive::open(backend.clone());
        archive.append(artifact(i64::MAX, "Last")).unwrap();

        let reopened = PortfolioArchive::open(backend);
        assert!(matches!(
            reopened.next_id(),
            Err(ArchiveError::IdsExhausted(i64::MAX))
        ));
    }

    #[test]
    fn test_failed_write_leaves_archive_unchanged() {
        let backend = Arc::new(MemoryStore::with_quota(64));
        let mut archive = PortfolioArchive::open(backend.clone());

        let mut big = artifact(1, "Big");
        big.rendered_document = "x".repeat(500);
        assert!(matches!(archive.append(big), Err(ArchiveError::Storage(_))));
        assert!(archive.is_empty());
        assert_eq!(backend.get(PORTFOLIOS_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_archive_loads_empty() {
        let backend: SharedStore = Arc::new(MemoryStore::new());
        backend.set(PORTFOLIOS_KEY, "not json").unwrap();
        assert!(PortfolioArchive::open(backend).is_empty());
    }
}
