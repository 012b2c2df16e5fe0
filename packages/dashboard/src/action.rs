use folio_core::{Project, ProjectDraft};
use folio_templates::Template;

/// Whether the project form adds a new project or edits one in place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(usize),
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Project",
            FormMode::Edit(_) => "Update Project",
        }
    }
}

/// Commands raised by the view layer, addressed by collection index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    PreviewProject(usize),
    EditProject(usize),
    DeleteProject(usize),
    SelectTemplate(String),
}

impl DashboardAction {
    /// Decode the `data-action`/`data-index` pair carried by a project card
    pub fn from_card(action: &str, index: &str) -> Option<Self> {
        let index: usize = index.trim().parse().ok()?;
        match action {
            "preview" => Some(DashboardAction::PreviewProject(index)),
            "edit" => Some(DashboardAction::EditProject(index)),
            "delete" => Some(DashboardAction::DeleteProject(index)),
            _ => None,
        }
    }
}

/// Result of a dispatched action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Detail view markup for the project
    Preview(String),
    /// Prefilled form; the dashboard is now in edit mode
    Edit(ProjectDraft),
    Deleted(Project),
    TemplateSelected(Template),
}
