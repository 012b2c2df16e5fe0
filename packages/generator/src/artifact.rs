use chrono::{DateTime, Utc};
use folio_core::Project;
use folio_templates::Template;
use serde::{Deserialize, Serialize};

/// A generated portfolio. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioArtifact {
    pub id: i64,
    pub title: String,
    #[serde(rename = "templateId", alias = "template")]
    pub template_id: Template,
    /// Copies of the selected projects as they were at generation time
    pub projects: Vec<Project>,
    #[serde(rename = "renderedDocument", alias = "html")]
    pub rendered_document: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl PortfolioArtifact {
    pub fn handle(&self) -> PortfolioHandle {
        PortfolioHandle::new(self.id)
    }
}

/// What the view layer receives once a portfolio has been generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioHandle {
    pub id: i64,
    /// File-style reference, e.g. `portfolio-1700000000000.html`
    pub reference: String,
}

impl PortfolioHandle {
    pub fn new(id: i64) -> Self {
        PortfolioHandle {
            id,
            reference: format!("portfolio-{}.html", id),
        }
    }
}
