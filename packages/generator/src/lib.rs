//! # Folio Generator
//!
//! Generation pipeline that snapshots selected projects, reports staged
//! progress, renders the final portfolio document and appends it to the
//! portfolio archive.

pub mod archive;
pub mod artifact;
pub mod pipeline;
pub mod progress;

pub use archive::{ArchiveError, ArchiveResult, PortfolioArchive};
pub use artifact::{PortfolioArtifact, PortfolioHandle};
pub use pipeline::{GenerationError, GenerationPipeline, GenerationRequest, GenerationResult};
pub use progress::{GenerationPhase, ProgressEvent, ProgressSchedule, MIN_PROGRESS_INTERVAL};

pub use tokio_util::sync::CancellationToken;
