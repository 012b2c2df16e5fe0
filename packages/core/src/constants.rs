use std::env;
use std::path::PathBuf;

/// Storage key holding the serialized project collection
pub const PROJECTS_KEY: &str = "projects";

/// Storage key holding the serialized portfolio archive
pub const PORTFOLIOS_KEY: &str = "portfolios";

/// Storage key holding the signed-in user
pub const CURRENT_USER_KEY: &str = "currentUser";

/// Title used when a portfolio is generated with a blank title
pub const DEFAULT_PORTFOLIO_TITLE: &str = "My Portfolio";

/// Get the path to the Folio data directory (~/.folio)
pub fn folio_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".folio")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
    }
}
