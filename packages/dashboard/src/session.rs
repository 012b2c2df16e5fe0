// ABOUTME: Session provider seam and the bundled storage-backed adapter
// ABOUTME: The dashboard only needs to know who is signed in, never how

use folio_core::CURRENT_USER_KEY;
use folio_storage::{read_value, remove_value, write_value, SharedStore, StorageResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Signed-in user as reported by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        User {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name when known, otherwise the email address
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

/// Session persisted in the key-value backend under `currentUser`
pub struct StoredSession {
    backend: SharedStore,
}

impl StoredSession {
    pub fn new(backend: SharedStore) -> Self {
        StoredSession { backend }
    }

    pub fn sign_in(&self, user: &User) -> StorageResult<()> {
        write_value(self.backend.as_ref(), CURRENT_USER_KEY, user)?;
        info!("Signed in {}", user.email);
        Ok(())
    }

    pub fn sign_out(&self) -> StorageResult<()> {
        remove_value(self.backend.as_ref(), CURRENT_USER_KEY)?;
        info!("Signed out");
        Ok(())
    }
}

impl SessionProvider for StoredSession {
    fn current_user(&self) -> Option<User> {
        let user: Option<User> = read_value(self.backend.as_ref(), CURRENT_USER_KEY);
        if user.is_none() {
            debug!("No signed-in user");
        }
        user
    }
}
