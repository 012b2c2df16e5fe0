// ABOUTME: Project model shared across Folio packages
// ABOUTME: Persisted records, creation drafts, and partial update patches

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::{normalize_optional, split_technologies};

/// Metadata recorded for an uploaded file. File contents are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub name: String,
    pub size: u64,
    #[serde(rename = "mimeType", alias = "type", default)]
    pub mime_type: String,
    #[serde(rename = "lastModified", default)]
    pub last_modified: i64,
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Comma separated technology list as entered by the user
    #[serde(default)]
    pub technologies: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub files: Vec<FileMetadata>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Build a stored record from a draft. Counters start at zero.
    pub fn from_draft(id: i64, draft: ProjectDraft, created_at: DateTime<Utc>) -> Self {
        Project {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description,
            technologies: draft.technologies,
            link: normalize_optional(draft.link),
            image: normalize_optional(draft.image),
            files: draft.files,
            views: 0,
            likes: 0,
            created_at,
        }
    }

    /// Technology tags in canonical form: trimmed, non-empty, in input order
    pub fn technology_tags(&self) -> Vec<String> {
        split_technologies(&self.technologies)
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_optional(value))
}

/// Input for creating a new project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    pub link: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub files: Vec<FileMetadata>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>) -> Self {
        ProjectDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn technologies(mut self, technologies: impl Into<String>) -> Self {
        self.technologies = technologies.into();
        self
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn file(mut self, file: FileMetadata) -> Self {
        self.files.push(file);
        self
    }

    /// Editable fields of an existing project, used to prefill an edit form
    pub fn from_project(project: &Project) -> Self {
        ProjectDraft {
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            link: project.link.clone(),
            image: project.image.clone(),
            files: project.files.clone(),
        }
    }
}

/// Partial update for an existing project.
///
/// `None` leaves a field untouched. For `link` and `image`, `Some(None)`
/// clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub files: Option<Vec<FileMetadata>>,
}

impl ProjectPatch {
    pub fn title(title: impl Into<String>) -> Self {
        ProjectPatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Patch that overwrites every editable field with the draft's values,
    /// matching a full form resubmission.
    pub fn replace_with(draft: ProjectDraft) -> Self {
        ProjectPatch {
            title: Some(draft.title),
            description: Some(draft.description),
            technologies: Some(draft.technologies),
            link: Some(draft.link),
            image: Some(draft.image),
            files: Some(draft.files),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ProjectPatch::default()
    }

    /// Merge the patch over `project`. Identity, counters and creation time
    /// are never touched.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if let Some(link) = self.link {
            project.link = normalize_optional(link);
        }
        if let Some(image) = self.image {
            project.image = normalize_optional(image);
        }
        if let Some(files) = self.files {
            project.files = files;
        }
    }
}
