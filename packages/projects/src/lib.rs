//! # Folio Projects
//!
//! The project store: an ordered, newest-first collection of portfolio
//! projects persisted through a key-value backend on every mutation.

pub mod demo;
pub mod stats;
pub mod store;

pub use demo::demo_projects;
pub use stats::ProjectStats;
pub use store::{ProjectStore, StoreError, StoreResult};

// Re-export the model so callers need a single dependency
pub use folio_core::{FileMetadata, Project, ProjectDraft, ProjectPatch, ValidationError};
