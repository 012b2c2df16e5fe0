// ABOUTME: Integration tests for the dashboard facade
// ABOUTME: Session gating, form modes, action dispatch, notifications and generation

use std::sync::Arc;
use std::time::Duration;

use folio_config::Config;
use folio_core::{NotificationLog, Notifier, ProjectDraft, Severity, PROJECTS_KEY};
use folio_dashboard::{
    ActionOutcome, CancellationToken, Dashboard, DashboardAction, DashboardError, FormMode,
    SessionProvider, StoredSession, User,
};
use folio_generator::GenerationError;
use folio_projects::StoreError;
use folio_storage::{KeyValueStore, MemoryStore, SharedStore};
use folio_templates::Template;
use mockall::mock;
use pretty_assertions::assert_eq;
use rstest::rstest;

mock! {
    pub Session {}

    impl SessionProvider for Session {
        fn current_user(&self) -> Option<User>;
    }
}

fn test_config() -> Config {
    Config {
        progress_interval: Duration::from_millis(5),
        ..Config::default()
    }
}

fn signed_in(backend: &SharedStore) -> StoredSession {
    let session = StoredSession::new(backend.clone());
    session
        .sign_in(&User::new("jane@example.com").with_name("Jane"))
        .unwrap();
    session
}

fn open_dashboard(config: &Config) -> (Dashboard, Arc<NotificationLog>, SharedStore) {
    let backend: SharedStore = Arc::new(MemoryStore::new());
    let log = Arc::new(NotificationLog::new());
    let notifier: Arc<dyn Notifier> = log.clone();
    let dashboard =
        Dashboard::open(&signed_in(&backend), backend.clone(), notifier, config).unwrap();
    (dashboard, log, backend)
}

#[test]
fn test_open_without_user_is_unauthenticated() {
    let mut session = MockSession::new();
    session.expect_current_user().times(1).returning(|| None);

    let result = Dashboard::open(
        &session,
        Arc::new(MemoryStore::new()),
        Arc::new(NotificationLog::new()),
        &test_config(),
    );
    assert!(matches!(result, Err(DashboardError::Unauthenticated)));
}

#[test]
fn test_open_seeds_demo_projects_when_configured() {
    let config = Config {
        seed_demo: true,
        ..test_config()
    };
    let (dashboard, _, _) = open_dashboard(&config);

    assert_eq!(dashboard.user().display_name(), "Jane");
    let stats = dashboard.stats();
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.total_views, 470);
    assert_eq!(stats.total_likes, 70);
}

#[test]
fn test_default_template_comes_from_config() {
    let config = Config {
        default_template: "professional".to_string(),
        ..test_config()
    };
    let (dashboard, _, _) = open_dashboard(&config);
    assert_eq!(dashboard.selected_template(), Template::Professional);

    let config = Config {
        default_template: "retro".to_string(),
        ..test_config()
    };
    let (dashboard, _, _) = open_dashboard(&config);
    assert_eq!(dashboard.selected_template(), Template::Modern);
}

#[test]
fn test_add_then_edit_round_trip() {
    let (mut dashboard, log, _) = open_dashboard(&test_config());

    dashboard
        .submit_project(ProjectDraft::new("Site").technologies("HTML, CSS"))
        .unwrap();
    dashboard.submit_project(ProjectDraft::new("Game")).unwrap();
    assert_eq!(log.last().unwrap().message, "Project added successfully!");

    let mut form = dashboard.begin_edit(1).unwrap();
    assert_eq!(dashboard.form_mode(), FormMode::Edit(1));
    assert_eq!(form.title, "Site");
    assert_eq!(form.technologies, "HTML, CSS");

    form.title = "Landing Page".to_string();
    let updated = dashboard.submit_project(form).unwrap();

    assert_eq!(updated.title, "Landing Page");
    assert_eq!(dashboard.form_mode(), FormMode::Create);
    assert_eq!(dashboard.projects()[1].title, "Landing Page");
    assert_eq!(dashboard.projects()[0].title, "Game");
    assert_eq!(dashboard.projects().len(), 2);
    assert_eq!(log.last().unwrap().message, "Project updated successfully!");
}

#[test]
fn test_validation_failure_is_notified_and_keeps_edit_mode() {
    let (mut dashboard, log, _) = open_dashboard(&test_config());
    dashboard.submit_project(ProjectDraft::new("Site")).unwrap();
    dashboard.begin_edit(0).unwrap();

    let err = dashboard
        .submit_project(ProjectDraft::new("Site").link("ftp://example.com"))
        .unwrap_err();
    assert!(matches!(err, DashboardError::Store(StoreError::Validation(_))));
    assert_eq!(dashboard.form_mode(), FormMode::Edit(0));
    assert_eq!(log.last().unwrap().severity, Severity::Error);
}

#[test]
fn test_write_failure_is_notified() {
    let backend: SharedStore = Arc::new(MemoryStore::with_quota(256));
    let log = Arc::new(NotificationLog::new());
    let notifier: Arc<dyn Notifier> = log.clone();
    let mut dashboard =
        Dashboard::open(&signed_in(&backend), backend.clone(), notifier, &test_config()).unwrap();

    let err = dashboard
        .submit_project(ProjectDraft::new("Huge").description("x".repeat(1_024)))
        .unwrap_err();

    assert!(matches!(err, DashboardError::Store(StoreError::Storage(_))));
    assert!(dashboard.projects().is_empty());
    assert_eq!(backend.get(PROJECTS_KEY).unwrap(), None);
    let last = log.last().unwrap();
    assert_eq!(last.severity, Severity::Error);
    assert!(last.message.contains("Storage write failed"));
}

#[rstest]
#[case("preview", "0")]
#[case("edit", "1")]
#[case("delete", "0")]
fn test_card_actions_dispatch(#[case] action: &str, #[case] index: &str) {
    let (mut dashboard, _, _) = open_dashboard(&Config {
        seed_demo: true,
        ..test_config()
    });
    let action = DashboardAction::from_card(action, index).unwrap();

    match dashboard.dispatch(action).unwrap() {
        ActionOutcome::Preview(html) => assert!(html.contains("Views:")),
        ActionOutcome::Edit(form) => {
            assert_eq!(form.title, dashboard.projects()[1].title);
            assert_eq!(dashboard.form_mode(), FormMode::Edit(1));
        }
        ActionOutcome::Deleted(_) => assert_eq!(dashboard.projects().len(), 1),
        other => panic!("Unexpected outcome {:?}", other),
    }
}

#[test]
fn test_dispatch_out_of_range_reports_error() {
    let (mut dashboard, log, _) = open_dashboard(&test_config());
    let err = dashboard
        .dispatch(DashboardAction::DeleteProject(3))
        .unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Store(StoreError::OutOfRange { index: 3, len: 0 })
    ));
    assert_eq!(log.last().unwrap().severity, Severity::Error);
}

#[test]
fn test_delete_before_edited_index_shifts_form() {
    let (mut dashboard, _, _) = open_dashboard(&Config {
        seed_demo: true,
        ..test_config()
    });
    dashboard.begin_edit(1).unwrap();
    dashboard.delete_project(0).unwrap();
    assert_eq!(dashboard.form_mode(), FormMode::Edit(0));

    dashboard.delete_project(0).unwrap();
    assert_eq!(dashboard.form_mode(), FormMode::Create);
}

#[test]
fn test_select_template_notifies_and_updates_preview() {
    let (mut dashboard, log, _) = open_dashboard(&test_config());

    let outcome = dashboard
        .dispatch(DashboardAction::SelectTemplate("creative".to_string()))
        .unwrap();
    assert_eq!(outcome, ActionOutcome::TemplateSelected(Template::Creative));

    let note = log.last().unwrap();
    assert_eq!(note.message, "Template \"creative\" selected!");
    assert_eq!(note.severity, Severity::Success);
    assert_eq!(dashboard.preview(), Template::Creative.render_preview());
    assert!(dashboard.preview_url().starts_with("data:text/html"));
}

#[tokio::test(start_paused = true)]
async fn test_generate_uses_selected_template() {
    let (mut dashboard, log, _) = open_dashboard(&Config {
        seed_demo: true,
        ..test_config()
    });
    dashboard.select_template("minimal");

    let selection = dashboard.all_project_indices();
    let handle = dashboard
        .generate("Jane's Work", selection, &CancellationToken::new())
        .await
        .unwrap();

    let artifact = dashboard.archive().lookup(handle.id).unwrap();
    assert_eq!(artifact.template_id, Template::Minimal);
    assert_eq!(artifact.projects.len(), 2);
    assert!(artifact.rendered_document.contains("Jane&#39;s Work"));
    assert_eq!(log.last().unwrap().message, "Portfolio generated successfully!");
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_generation_is_informational() {
    let (mut dashboard, log, _) = open_dashboard(&test_config());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = dashboard
        .generate("Never", vec![], &cancel)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DashboardError::Generation(GenerationError::Cancelled)
    ));
    assert!(dashboard.archive().is_empty());
    assert_eq!(log.last().unwrap().severity, Severity::Info);
}
