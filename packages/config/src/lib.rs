// ABOUTME: Environment-driven configuration for Folio
// ABOUTME: Storage location, quota, default template, and progress pacing

pub mod constants;

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use constants::*;

/// Browser local storage typically caps a site at 5 MiB
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;
pub const DEFAULT_TEMPLATE_ID: &str = "modern";
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 200;
pub const DEFAULT_PROGRESS_STEP: u8 = 10;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("{name} is out of valid range ({min}-{max}): {value}")]
    OutOfRange {
        name: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub storage_dir: PathBuf,
    /// `None` disables the quota
    pub storage_quota_bytes: Option<usize>,
    pub default_template: String,
    pub progress_interval: Duration,
    pub progress_step: u8,
    pub seed_demo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_dir: folio_core::folio_dir(),
            storage_quota_bytes: Some(DEFAULT_STORAGE_QUOTA_BYTES),
            default_template: DEFAULT_TEMPLATE_ID.to_string(),
            progress_interval: Duration::from_millis(DEFAULT_PROGRESS_INTERVAL_MS),
            progress_step: DEFAULT_PROGRESS_STEP,
            seed_demo: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let storage_dir = env::var(FOLIO_STORAGE_DIR)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let storage_quota_bytes = match env::var(FOLIO_STORAGE_QUOTA_BYTES) {
            Ok(raw) => {
                let quota = parse_number(FOLIO_STORAGE_QUOTA_BYTES, &raw)?;
                // Zero means unlimited
                if quota == 0 {
                    None
                } else {
                    Some(quota as usize)
                }
            }
            Err(_) => defaults.storage_quota_bytes,
        };

        let default_template = env::var(FOLIO_DEFAULT_TEMPLATE)
            .ok()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.default_template);

        let progress_interval = match env::var(FOLIO_PROGRESS_INTERVAL_MS) {
            Ok(raw) => {
                let ms = parse_in_range(FOLIO_PROGRESS_INTERVAL_MS, &raw, 1, 10_000)?;
                Duration::from_millis(ms)
            }
            Err(_) => defaults.progress_interval,
        };

        let progress_step = match env::var(FOLIO_PROGRESS_STEP) {
            Ok(raw) => parse_in_range(FOLIO_PROGRESS_STEP, &raw, 1, 100)? as u8,
            Err(_) => defaults.progress_step,
        };

        let seed_demo = match env::var(FOLIO_SEED_DEMO) {
            Ok(raw) => raw
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: FOLIO_SEED_DEMO,
                    value: raw.clone(),
                })?,
            Err(_) => defaults.seed_demo,
        };

        let config = Config {
            storage_dir,
            storage_quota_bytes,
            default_template,
            progress_interval,
            progress_step,
            seed_demo,
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_number(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        })
}

fn parse_in_range(name: &'static str, raw: &str, min: u64, max: u64) -> Result<u64, ConfigError> {
    let value = parse_number(name, raw)?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
