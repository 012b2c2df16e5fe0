use chrono::Utc;
use folio_core::{
    generate_time_id, validate_project_draft, validate_project_patch, Project, ProjectDraft,
    ProjectPatch, ValidationError, PROJECTS_KEY,
};
use folio_storage::{read_collection, write_collection, SharedStore, StorageError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::demo::demo_projects;
use crate::stats::ProjectStats;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Project index {index} is out of range (collection has {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("Project not found: {0}")]
    NotFound(i64),
    #[error("No project id left after {0}")]
    IdsExhausted(i64),
    #[error("Validation errors: {0:?}")]
    Validation(Vec<ValidationError>),
    #[error("Storage write failed: {0}")]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Newest-first project collection kept in sync with its backend.
///
/// Every mutation is applied to a copy, written, and only then swapped in,
/// so a failed write leaves memory matching the last persisted state.
pub struct ProjectStore {
    backend: SharedStore,
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Create a store over `backend` and load whatever it holds
    pub fn open(backend: SharedStore) -> Self {
        let mut store = ProjectStore {
            backend,
            projects: Vec::new(),
        };
        store.load();
        store
    }

    /// Reload from the backend. Missing or corrupt data yields an empty collection.
    pub fn load(&mut self) -> &[Project] {
        self.projects = read_collection(self.backend.as_ref(), PROJECTS_KEY);
        debug!("Loaded {} projects", self.projects.len());
        &self.projects
    }

    /// Write the in-memory collection to the backend
    pub fn persist(&self) -> StoreResult<()> {
        write_collection(self.backend.as_ref(), PROJECTS_KEY, &self.projects)?;
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> StoreResult<&Project> {
        self.projects.get(index).ok_or(StoreError::OutOfRange {
            index,
            len: self.projects.len(),
        })
    }

    pub fn find(&self, id: i64) -> StoreResult<&Project> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Current position of the project with `id`
    pub fn position(&self, id: i64) -> Option<usize> {
        self.projects.iter().position(|project| project.id == id)
    }

    /// Copies of the projects at `indices`, in the order given
    pub fn select(&self, indices: &[usize]) -> StoreResult<Vec<Project>> {
        indices
            .iter()
            .map(|&index| self.get(index).cloned())
            .collect()
    }

    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_projects(&self.projects)
    }

    /// Add a project at the front of the collection
    pub fn insert(&mut self, draft: ProjectDraft) -> StoreResult<Project> {
        let errors = validate_project_draft(&draft);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let last_id = self.projects.iter().map(|p| p.id).max();
        let id = generate_time_id(last_id)
            .ok_or(StoreError::IdsExhausted(last_id.unwrap_or_default()))?;
        let project = Project::from_draft(id, draft, Utc::now());

        let mut next = Vec::with_capacity(self.projects.len() + 1);
        next.push(project.clone());
        next.extend(self.projects.iter().cloned());
        self.commit(next)?;

        info!("Created project '{}' with ID {}", project.title, project.id);
        Ok(project)
    }

    /// Merge `patch` over the project at `index`
    pub fn update(&mut self, index: usize, patch: ProjectPatch) -> StoreResult<Project> {
        self.get(index)?;
        let errors = validate_project_patch(&patch);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let mut next = self.projects.clone();
        patch.apply_to(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next)?;

        info!("Updated project '{}' (ID: {})", updated.title, updated.id);
        Ok(updated)
    }

    /// Remove the project at `index`; later projects shift down by one
    pub fn delete(&mut self, index: usize) -> StoreResult<Project> {
        self.get(index)?;

        let mut next = self.projects.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Deleted project '{}' (ID: {})", removed.title, removed.id);
        Ok(removed)
    }

    /// Write the sample projects when the store is empty. Returns whether it seeded.
    pub fn seed_demo_projects(&mut self) -> StoreResult<bool> {
        if !self.projects.is_empty() {
            return Ok(false);
        }
        self.commit(demo_projects(Utc::now()))?;
        info!("Seeded {} demo projects", self.projects.len());
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Project>) -> StoreResult<()> {
        if let Err(e) = write_collection(self.backend.as_ref(), PROJECTS_KEY, &next) {
            warn!("Project change not applied: {}", e);
            return Err(e.into());
        }
        self.projects = next;
        Ok(())
    }
}
