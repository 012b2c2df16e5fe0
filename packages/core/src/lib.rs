// ABOUTME: Core types, traits, and utilities for Folio
// ABOUTME: Foundational package providing the project model shared by every Folio package

pub mod constants;
pub mod notify;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{FileMetadata, Project, ProjectDraft, ProjectPatch};

// Re-export constants
pub use constants::{
    folio_dir, CURRENT_USER_KEY, DEFAULT_PORTFOLIO_TITLE, PORTFOLIOS_KEY, PROJECTS_KEY,
};

// Re-export notification sinks
pub use notify::{Notification, NotificationLog, Notifier, Severity, TracingNotifier};

// Re-export utilities
pub use utils::{generate_time_id, html_escape, normalize_optional, split_technologies};

// Re-export validation
pub use validation::{validate_project_draft, validate_project_patch, ValidationError};
