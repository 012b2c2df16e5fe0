use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Portfolio templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Creative,
    Professional,
    Minimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown template: {0}")]
pub struct UnknownTemplate(pub String);

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Modern,
        Template::Creative,
        Template::Professional,
        Template::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Creative => "creative",
            Template::Professional => "professional",
            Template::Minimal => "minimal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Template::Modern => "Modern",
            Template::Creative => "Creative",
            Template::Professional => "Professional",
            Template::Minimal => "Minimal",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Template::Modern => "Clean and minimalist design",
            Template::Creative => "Bold and vibrant design",
            Template::Professional => "Corporate and elegant design",
            Template::Minimal => "Simple and clean design",
        }
    }

    /// Total lookup: unknown identifiers fall back to the default template.
    pub fn resolve(id: &str) -> Template {
        id.parse().unwrap_or_else(|_| {
            debug!("Unknown template '{}', using {}", id, Template::default());
            Template::default()
        })
    }
}

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(Template::Modern),
            "creative" => Ok(Template::Creative),
            "professional" => Ok(Template::Professional),
            "minimal" => Ok(Template::Minimal),
            _ => Err(UnknownTemplate(s.to_string())),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
