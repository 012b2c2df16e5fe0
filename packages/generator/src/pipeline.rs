// ABOUTME: Portfolio generation pipeline
// ABOUTME: Snapshot selection, staged progress with cancellation, render, archive

use chrono::Utc;
use folio_core::DEFAULT_PORTFOLIO_TITLE;
use folio_projects::{ProjectStore, StoreError};
use folio_templates::Template;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::archive::{ArchiveError, PortfolioArchive};
use crate::artifact::{PortfolioArtifact, PortfolioHandle};
use crate::progress::{GenerationPhase, ProgressEvent, ProgressSchedule};

const DEFAULT_EVENT_CHANNEL_SIZE: usize = 64;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid project selection: {0}")]
    Selection(#[from] StoreError),
    #[error("Portfolio generation was cancelled")]
    Cancelled,
    #[error("Failed to archive portfolio: {0}")]
    Archive(#[from] ArchiveError),
}

pub type GenerationResult<T> = Result<T, GenerationError>;

/// What to generate: a title, store indices in output order, and a template
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub title: String,
    pub selection: Vec<usize>,
    pub template: Template,
}

impl GenerationRequest {
    pub fn new(title: impl Into<String>, selection: Vec<usize>, template: Template) -> Self {
        GenerationRequest {
            title: title.into(),
            selection,
            template,
        }
    }

    /// Title to render; blank titles fall back to the default
    pub fn effective_title(&self) -> &str {
        if self.title.trim().is_empty() {
            DEFAULT_PORTFOLIO_TITLE
        } else {
            &self.title
        }
    }
}

/// Drives generation runs and broadcasts their progress
pub struct GenerationPipeline {
    schedule: ProgressSchedule,
    event_tx: broadcast::Sender<ProgressEvent>,
}

impl Default for GenerationPipeline {
    fn default() -> Self {
        Self::new(ProgressSchedule::default())
    }
}

impl GenerationPipeline {
    pub fn new(schedule: ProgressSchedule) -> Self {
        let (event_tx, _) = broadcast::channel(DEFAULT_EVENT_CHANNEL_SIZE);
        GenerationPipeline { schedule, event_tx }
    }

    pub fn schedule(&self) -> ProgressSchedule {
        self.schedule
    }

    /// Subscribe to progress events of every subsequent run
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressEvent> {
        self.event_tx.subscribe()
    }

    /// Run one generation.
    ///
    /// The selected projects are copied before staging starts, so edits made
    /// to the store afterwards do not reach the artifact. Cancelling `cancel`
    /// before progress reaches 100 stops the run without touching the archive.
    pub async fn run(
        &self,
        request: GenerationRequest,
        store: &ProjectStore,
        archive: &mut PortfolioArchive,
        cancel: &CancellationToken,
    ) -> GenerationResult<PortfolioHandle> {
        let snapshot = store.select(&request.selection)?;
        let title = request.effective_title().to_string();
        debug!(
            "Generating '{}' with {} projects using the {} template",
            title,
            snapshot.len(),
            request.template
        );

        self.broadcast(ProgressEvent::at(0));
        self.stage(cancel).await?;

        let rendered_document = request.template.render_final(&title, &snapshot);
        let archived = match archive.next_id() {
            Ok(id) => archive
                .append(PortfolioArtifact {
                    id,
                    title,
                    template_id: request.template,
                    projects: snapshot,
                    rendered_document,
                    created_at: Utc::now(),
                })
                .map(|stored| stored.handle()),
            Err(e) => Err(e),
        };

        let handle = match archived {
            Ok(handle) => handle,
            Err(e) => {
                self.broadcast(ProgressEvent {
                    progress: 100,
                    phase: GenerationPhase::Failed,
                });
                return Err(e.into());
            }
        };

        self.broadcast(ProgressEvent::at(100));
        info!("Generated portfolio {}", handle.reference);
        Ok(handle)
    }

    /// Advance progress one step per tick until it reaches 100
    async fn stage(&self, cancel: &CancellationToken) -> GenerationResult<()> {
        let period = self.schedule.period();
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut progress: u8 = 0;
        for stage in self.schedule.stages() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    warn!("Portfolio generation cancelled at {}%", progress);
                    self.broadcast(ProgressEvent {
                        progress,
                        phase: GenerationPhase::Cancelled,
                    });
                    return Err(GenerationError::Cancelled);
                }
                _ = ticker.tick() => {
                    progress = stage;
                    // The 100% event is sent once the artifact is archived
                    if progress < 100 {
                        self.broadcast(ProgressEvent::at(progress));
                    }
                }
            }
        }
        Ok(())
    }

    fn broadcast(&self, event: ProgressEvent) {
        if let Err(e) = self.event_tx.send(event) {
            if self.event_tx.receiver_count() > 0 {
                warn!("Failed to broadcast progress event: {}", e);
            }
        }
    }
}
