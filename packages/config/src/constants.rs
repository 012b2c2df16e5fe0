// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Folio

// Storage Configuration
pub const FOLIO_STORAGE_DIR: &str = "FOLIO_STORAGE_DIR";
pub const FOLIO_STORAGE_QUOTA_BYTES: &str = "FOLIO_STORAGE_QUOTA_BYTES";

// Dashboard Configuration
pub const FOLIO_DEFAULT_TEMPLATE: &str = "FOLIO_DEFAULT_TEMPLATE";
pub const FOLIO_SEED_DEMO: &str = "FOLIO_SEED_DEMO";

// Generation Progress Configuration
pub const FOLIO_PROGRESS_INTERVAL_MS: &str = "FOLIO_PROGRESS_INTERVAL_MS";
pub const FOLIO_PROGRESS_STEP: &str = "FOLIO_PROGRESS_STEP";
