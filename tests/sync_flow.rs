//! End-to-end tests for the synchronization protocols: submit, toggle,
//! delete, and refresh, driven through the application state against a
//! wiremock task service.
//!
//! Local state must only ever change after the server confirms a mutation;
//! these tests pin that down for both the success and failure paths.

use reqwest::Url;
use roster::app::AppState;
use roster::domain::{EditSession, FilterMode, Task, TaskId, UiMode};
use roster::notify::NoticeKind;
use roster::remote::StoreClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(server: &MockServer) -> AppState {
    AppState::new(StoreClient::new(Url::parse(&server.uri()).unwrap()))
}

fn task(id: i64, title: &str, description: &str, completed: bool) -> Task {
    Task {
        id: TaskId::Int(id),
        title: title.to_string(),
        description: description.to_string(),
        completed,
        created_at: Some("2026-08-30T09:00:00".to_string()),
    }
}

// =============================================================================
// Submit: create
// =============================================================================

#[tokio::test]
async fn test_create_adds_exactly_one_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(201).set_body_string(
            r#"{"id": 10, "title": "Buy milk", "description": "", "completed": false,
                "created_at": "2026-08-30T12:00:00"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(1, "A", "", false)]);
    let before = app.collection.len();

    app.start_add();
    app.form.title = "Buy milk".to_string();
    app.submit_form().await;

    assert_eq!(app.collection.len(), before + 1);
    let created = app.collection.get(&TaskId::Int(10)).unwrap();
    assert_eq!(created.title, "Buy milk");
    assert!(!created.completed);

    // Session reset, draft cleared, success reported
    assert_eq!(app.session, EditSession::Idle);
    assert_eq!(app.form.title, "");
    assert_eq!(app.ui_mode, UiMode::Normal);
    let notice = app.notifier.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Task added successfully!");
}

#[tokio::test]
async fn test_create_failure_keeps_draft_and_collection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.start_add();
    app.form.title = "Buy milk".to_string();
    app.form.description = "2 liters".to_string();
    app.submit_form().await;

    // Nothing applied, draft still in the fields for another attempt
    assert!(app.collection.is_empty());
    assert_eq!(app.form.title, "Buy milk");
    assert_eq!(app.form.description, "2 liters");
    assert_eq!(app.ui_mode, UiMode::Form);
    assert_eq!(app.notifier.current().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_whitespace_title_never_reaches_the_network() {
    let server = MockServer::start().await;

    // Any request at all would fail the expect(0) check on drop
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.start_add();
    app.form.title = "   ".to_string();
    app.submit_form().await;

    assert!(app.collection.is_empty());
    let notice = app.notifier.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Please enter a task title");
}

// =============================================================================
// Submit: edit
// =============================================================================

#[tokio::test]
async fn test_edit_populates_draft_and_submits_update_not_create() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": 2, "title": "Renamed", "description": "notes", "completed": false,
                "created_at": "2026-08-30T09:00:00"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection
        .replace_all(vec![task(1, "A", "", false), task(2, "Old", "notes", false)]);
    app.selected_index = 1;

    app.start_edit_selected();
    assert_eq!(app.form.title, "Old");
    assert_eq!(app.form.description, "notes");
    assert_eq!(app.session, EditSession::Editing(TaskId::Int(2)));

    app.form.title = "Renamed".to_string();
    app.submit_form().await;

    // Entry replaced in place, no new entry
    assert_eq!(app.collection.len(), 2);
    assert_eq!(app.collection.tasks()[1].title, "Renamed");
    assert_eq!(app.session, EditSession::Idle);
    assert_eq!(
        app.notifier.current().unwrap().message,
        "Task updated successfully!"
    );
}

#[tokio::test]
async fn test_edit_preserves_completed_flag() {
    let server = MockServer::start().await;

    // The edit form must not alter completion state of a completed task
    Mock::given(method("PUT"))
        .and(path("/todos/4"))
        .and(body_json(serde_json::json!({
            "title": "Polished",
            "description": "",
            "completed": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": 4, "title": "Polished", "description": "", "completed": true}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(4, "Rough", "", true)]);
    app.set_filter(FilterMode::Completed);

    app.start_edit_selected();
    app.form.title = "Polished".to_string();
    app.submit_form().await;

    assert!(app.collection.get(&TaskId::Int(4)).unwrap().completed);
}

// =============================================================================
// Toggle
// =============================================================================

#[tokio::test]
async fn test_toggle_flips_completed_and_nothing_else() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/1"))
        .and(body_json(serde_json::json!({
            "title": "A",
            "description": "keep me",
            "completed": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id": 1, "title": "A", "description": "keep me", "completed": true,
                "created_at": "2026-08-30T09:00:00"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection
        .replace_all(vec![task(1, "A", "keep me", false)]);

    app.toggle_selected().await;

    let entry = app.collection.get(&TaskId::Int(1)).unwrap();
    assert!(entry.completed);
    assert_eq!(entry.title, "A");
    assert_eq!(entry.description, "keep me");
    assert_eq!(entry.created_at.as_deref(), Some("2026-08-30T09:00:00"));
    // Toggling quietly succeeds, no toast
    assert!(app.notifier.current().is_none());
}

#[tokio::test]
async fn test_toggle_failure_leaves_entry_untouched() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection
        .replace_all(vec![task(1, "A", "keep me", false)]);
    let before = app.collection.get(&TaskId::Int(1)).unwrap().clone();

    app.toggle_selected().await;

    assert_eq!(app.collection.get(&TaskId::Int(1)).unwrap(), &before);
    assert_eq!(app.notifier.current().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_toggle_with_empty_selection_is_noop() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.toggle_selected().await;
    assert!(app.notifier.current().is_none());
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_confirmed_delete_removes_entry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection
        .replace_all(vec![task(1, "A", "", false), task(2, "B", "", false)]);

    app.request_delete_selected();
    assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
    app.confirm_pending_delete().await;

    assert!(app.collection.get(&TaskId::Int(1)).is_none());
    assert_eq!(app.collection.len(), 1);
    assert_eq!(
        app.notifier.current().unwrap().message,
        "Task deleted successfully!"
    );
}

#[tokio::test]
async fn test_failed_delete_keeps_entry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error": "Todo not found"}"#))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(1, "A", "", false)]);

    app.request_delete_selected();
    app.confirm_pending_delete().await;

    assert_eq!(app.collection.len(), 1);
    assert_eq!(app.notifier.current().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_cancelled_delete_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(1, "A", "", false)]);

    app.request_delete_selected();
    app.cancel_pending_delete();

    assert_eq!(app.collection.len(), 1);
    assert_eq!(app.ui_mode, UiMode::Normal);
}

// =============================================================================
// Load / refresh
// =============================================================================

#[tokio::test]
async fn test_load_replaces_collection_from_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"todos": [
                {"id": 1, "title": "A", "completed": false},
                {"id": 2, "title": "B", "completed": true}
            ], "count": 2}"#,
        ))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(9, "stale", "", false)]);

    assert!(app.load_tasks().await);
    assert_eq!(app.collection.len(), 2);
    assert!(app.collection.get(&TaskId::Int(9)).is_none());
}

#[tokio::test]
async fn test_failed_load_keeps_local_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(1, "A", "", false)]);

    assert!(!app.load_tasks().await);
    assert_eq!(app.collection.len(), 1);
    assert_eq!(app.notifier.current().unwrap().kind, NoticeKind::Error);
}

#[tokio::test]
async fn test_refresh_posts_info_notice_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"todos": []}"#))
        .mount(&server)
        .await;

    let mut app = app_for(&server);
    app.refresh().await;

    let notice = app.notifier.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "Task list refreshed");
}

// =============================================================================
// Scenario: rendering inputs
// =============================================================================

#[tokio::test]
async fn test_completed_filter_hides_active_only_collection_but_not_stats() {
    let server = MockServer::start().await;
    let mut app = app_for(&server);
    app.collection.replace_all(vec![task(1, "A", "", false)]);

    app.set_filter(FilterMode::Completed);

    assert!(app.visible_tasks().is_empty());
    let stats = app.stats();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 0);
}
