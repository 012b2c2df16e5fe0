// ABOUTME: Dashboard facade owned by the view layer
// ABOUTME: Routes user intents to the project store, templates and generator and reports outcomes

use std::sync::Arc;

use folio_config::Config;
use folio_core::{Notifier, Project, ProjectDraft, ProjectPatch, Severity};
use folio_formatter::{format_project_details, format_projects_grid};
use folio_generator::{
    GenerationError, GenerationPipeline, GenerationRequest, PortfolioArchive, PortfolioHandle,
    ProgressEvent, ProgressSchedule,
};
use folio_projects::{ProjectStats, ProjectStore, StoreError};
use folio_storage::SharedStore;
use folio_templates::Template;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::action::{ActionOutcome, DashboardAction, FormMode};
use crate::session::{SessionProvider, User};

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("No signed-in user")]
    Unauthenticated,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

pub struct Dashboard {
    user: User,
    store: ProjectStore,
    archive: PortfolioArchive,
    pipeline: GenerationPipeline,
    notifier: Arc<dyn Notifier>,
    selected_template: Template,
    form_mode: FormMode,
}

impl Dashboard {
    /// Open the dashboard for the signed-in user.
    ///
    /// The project store and the portfolio archive share `backend`.
    pub fn open(
        session: &dyn SessionProvider,
        backend: SharedStore,
        notifier: Arc<dyn Notifier>,
        config: &Config,
    ) -> DashboardResult<Self> {
        let user = session.current_user().ok_or(DashboardError::Unauthenticated)?;

        let mut store = ProjectStore::open(backend.clone());
        if config.seed_demo {
            if let Err(e) = store.seed_demo_projects() {
                notifier.notify(&format!("Failed to add sample projects: {}", e), Severity::Error);
            }
        }

        let dashboard = Dashboard {
            user,
            store,
            archive: PortfolioArchive::open(backend),
            pipeline: GenerationPipeline::new(ProgressSchedule::from_config(config)),
            notifier,
            selected_template: Template::resolve(&config.default_template),
            form_mode: FormMode::Create,
        };
        info!(
            "Opened dashboard for {} with {} projects",
            dashboard.user.email,
            dashboard.store.len()
        );
        Ok(dashboard)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn projects(&self) -> &[Project] {
        self.store.projects()
    }

    pub fn stats(&self) -> ProjectStats {
        self.store.stats()
    }

    pub fn archive(&self) -> &PortfolioArchive {
        &self.archive
    }

    pub fn selected_template(&self) -> Template {
        self.selected_template
    }

    pub fn form_mode(&self) -> FormMode {
        self.form_mode
    }

    /// Progress of every generation started from this dashboard
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ProgressEvent> {
        self.pipeline.subscribe()
    }

    /// Grid markup for the project listing
    pub fn projects_grid(&self) -> String {
        format_projects_grid(self.store.projects())
    }

    /// Indices of every project, the default generation selection
    pub fn all_project_indices(&self) -> Vec<usize> {
        (0..self.store.len()).collect()
    }

    pub fn select_template(&mut self, template_id: &str) -> Template {
        self.selected_template = Template::resolve(template_id);
        self.notifier.notify(
            &format!("Template \"{}\" selected!", self.selected_template),
            Severity::Success,
        );
        self.selected_template
    }

    /// Preview document for the selected template
    pub fn preview(&self) -> String {
        self.selected_template.render_preview()
    }

    /// The preview as a `data:` URL, ready to load in a frame
    pub fn preview_url(&self) -> String {
        folio_templates::preview_data_url(self.selected_template.as_str())
    }

    pub fn preview_project(&self, index: usize) -> DashboardResult<String> {
        let project = self.store.get(index)?;
        Ok(format_project_details(project))
    }

    /// Switch the form to edit `index`, returning its current values
    pub fn begin_edit(&mut self, index: usize) -> DashboardResult<ProjectDraft> {
        let form = ProjectDraft::from_project(self.store.get(index)?);
        self.form_mode = FormMode::Edit(index);
        debug!("Editing project at index {}", index);
        Ok(form)
    }

    pub fn cancel_edit(&mut self) {
        self.form_mode = FormMode::Create;
    }

    /// Add or update depending on the form mode; the form returns to create mode on success
    pub fn submit_project(&mut self, form: ProjectDraft) -> DashboardResult<Project> {
        let result = match self.form_mode {
            FormMode::Create => self
                .store
                .insert(form)
                .map(|project| (project, "Project added successfully!")),
            FormMode::Edit(index) => self
                .store
                .update(index, ProjectPatch::replace_with(form))
                .map(|project| (project, "Project updated successfully!")),
        };

        match result {
            Ok((project, message)) => {
                self.form_mode = FormMode::Create;
                self.notifier.notify(message, Severity::Success);
                Ok(project)
            }
            Err(e) => Err(self.report(e.into())),
        }
    }

    pub fn delete_project(&mut self, index: usize) -> DashboardResult<Project> {
        match self.store.delete(index) {
            Ok(removed) => {
                // Indices after the deleted one have shifted
                let mode = self.form_mode;
                match mode {
                    FormMode::Edit(editing) if editing == index => self.form_mode = FormMode::Create,
                    FormMode::Edit(editing) if editing > index => {
                        self.form_mode = FormMode::Edit(editing - 1)
                    }
                    _ => {}
                }
                self.notifier
                    .notify("Project deleted successfully!", Severity::Success);
                Ok(removed)
            }
            Err(e) => Err(self.report(e.into())),
        }
    }

    pub fn dispatch(&mut self, action: DashboardAction) -> DashboardResult<ActionOutcome> {
        debug!("Dispatching {:?}", action);
        match action {
            DashboardAction::PreviewProject(index) => {
                self.preview_project(index).map(ActionOutcome::Preview)
            }
            DashboardAction::EditProject(index) => self.begin_edit(index).map(ActionOutcome::Edit),
            DashboardAction::DeleteProject(index) => {
                self.delete_project(index).map(ActionOutcome::Deleted)
            }
            DashboardAction::SelectTemplate(id) => {
                Ok(ActionOutcome::TemplateSelected(self.select_template(&id)))
            }
        }
    }

    /// Generate a portfolio from the projects at `selection` with the selected template
    pub async fn generate(
        &mut self,
        title: &str,
        selection: Vec<usize>,
        cancel: &CancellationToken,
    ) -> DashboardResult<PortfolioHandle> {
        let request = GenerationRequest::new(title, selection, self.selected_template);
        let result = self
            .pipeline
            .run(request, &self.store, &mut self.archive, cancel)
            .await;
        match result {
            Ok(handle) => {
                self.notifier
                    .notify("Portfolio generated successfully!", Severity::Success);
                Ok(handle)
            }
            Err(GenerationError::Cancelled) => {
                self.notifier
                    .notify("Portfolio generation cancelled", Severity::Info);
                Err(GenerationError::Cancelled.into())
            }
            Err(e) => Err(self.report(e.into())),
        }
    }

    fn report(&self, error: DashboardError) -> DashboardError {
        self.notifier.notify(&error.to_string(), Severity::Error);
        error
    }
}
