//! # Folio Dashboard
//!
//! The object a view layer holds: it checks the session, owns the project
//! store and the portfolio archive, and turns user intents into store
//! mutations, previews and generation runs, reporting each outcome to a
//! [`folio_core::Notifier`].

pub mod action;
pub mod dashboard;
pub mod session;

pub use action::{ActionOutcome, DashboardAction, FormMode};
pub use dashboard::{Dashboard, DashboardError, DashboardResult};
pub use session::{SessionProvider, StoredSession, User};

pub use folio_generator::CancellationToken;
