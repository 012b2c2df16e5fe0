use thiserror::Error;
use url::Url;

use crate::types::{FileMetadata, ProjectDraft, ProjectPatch};

/// Validation errors for project data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a draft before it is inserted
pub fn validate_project_draft(data: &ProjectDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Project title is required"));
    }

    if let Some(ref link) = data.link {
        validate_link(link, &mut errors);
    }

    validate_files(&data.files, &mut errors);

    errors
}

/// Validates a patch before it is merged
pub fn validate_project_patch(data: &ProjectPatch) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref title) = data.title {
        if title.trim().is_empty() {
            errors.push(ValidationError::new("title", "Project title cannot be empty"));
        }
    }

    if let Some(Some(ref link)) = data.link {
        validate_link(link, &mut errors);
    }

    if let Some(ref files) = data.files {
        validate_files(files, &mut errors);
    }

    errors
}

fn validate_link(link: &str, errors: &mut Vec<ValidationError>) {
    let link = link.trim();
    // Blank links are normalised to "no link" later
    if link.is_empty() {
        return;
    }

    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::new(
            "link",
            format!("Unsupported link scheme: {}", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "link",
            format!("Invalid link '{}': {}", link, e),
        )),
    }
}

fn validate_files(files: &[FileMetadata], errors: &mut Vec<ValidationError>) {
    if files.iter().any(|file| file.name.trim().is_empty()) {
        errors.push(ValidationError::new("files", "File names cannot be empty"));
    }
}
