// ABOUTME: Staged progress reporting for portfolio generation
// ABOUTME: Phase labels by progress band and the pacing schedule taken from config

use std::fmt;
use std::time::Duration;

use folio_config::Config;
use serde::{Deserialize, Serialize};

/// User-facing stage of a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    Preparing,
    ProcessingTemplate,
    AddingProjects,
    Finalizing,
    Done,
    Cancelled,
    Failed,
}

impl GenerationPhase {
    /// Phase shown while progress sits at `progress` percent
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            0..=29 => GenerationPhase::Preparing,
            30..=59 => GenerationPhase::ProcessingTemplate,
            60..=89 => GenerationPhase::AddingProjects,
            90..=99 => GenerationPhase::Finalizing,
            _ => GenerationPhase::Done,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenerationPhase::Preparing => "Preparing your portfolio...",
            GenerationPhase::ProcessingTemplate => "Processing template...",
            GenerationPhase::AddingProjects => "Adding projects...",
            GenerationPhase::Finalizing => "Finalizing...",
            GenerationPhase::Done => "Portfolio generated successfully!",
            GenerationPhase::Cancelled => "Portfolio generation cancelled",
            GenerationPhase::Failed => "Portfolio generation failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationPhase::Done | GenerationPhase::Cancelled | GenerationPhase::Failed
        )
    }
}

impl fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Broadcast to subscribers as a run advances
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub progress: u8,
    pub phase: GenerationPhase,
}

impl ProgressEvent {
    pub fn at(progress: u8) -> Self {
        ProgressEvent {
            progress,
            phase: GenerationPhase::for_progress(progress),
        }
    }

    pub fn label(&self) -> &'static str {
        self.phase.label()
    }
}

/// Shortest tick the staging loop runs at
pub const MIN_PROGRESS_INTERVAL: Duration = Duration::from_millis(1);

/// How fast the progress counter moves: `step` percent every `interval`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSchedule {
    pub step: u8,
    pub interval: Duration,
}

impl Default for ProgressSchedule {
    fn default() -> Self {
        ProgressSchedule {
            step: folio_config::DEFAULT_PROGRESS_STEP,
            interval: Duration::from_millis(folio_config::DEFAULT_PROGRESS_INTERVAL_MS),
        }
    }
}

impl ProgressSchedule {
    pub fn new(step: u8, interval: Duration) -> Self {
        ProgressSchedule {
            step: step.clamp(1, 100),
            interval: interval.max(MIN_PROGRESS_INTERVAL),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.progress_step, config.progress_interval)
    }

    /// Progress values reported after each tick; always ends at exactly 100
    pub fn stages(&self) -> Vec<u8> {
        let step = self.step.max(1);
        let mut stages = Vec::new();
        let mut progress: u8 = 0;
        while progress < 100 {
            progress = progress.saturating_add(step).min(100);
            stages.push(progress);
        }
        stages
    }

    /// Tick period actually used; a zero interval set on the field directly is raised to the minimum
    pub fn period(&self) -> Duration {
        self.interval.max(MIN_PROGRESS_INTERVAL)
    }

    /// Minimum time a run takes before rendering
    pub fn total_duration(&self) -> Duration {
        self.period() * self.stages().len() as u32
    }
}
