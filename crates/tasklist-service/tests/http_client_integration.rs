//! Integration tests for HttpService against the in-memory API server.
//!
//! Each test spawns an axum server on 127.0.0.1:0 and exercises the HTTP
//! client through the full request/response cycle.

use tasklist_core::{NewTask, NewTaskList, Priority, Status};
use tasklist_service::{HttpService, ServiceError, TaskListService};

async fn spawn_server() -> String {
    let server = tasklist_service::test_helpers::spawn_test_server().await;
    server.base_url
}

fn new_task(title: &str, priority: Priority) -> NewTask {
    NewTask {
        title: title.into(),
        description: String::new(),
        due_date: None,
        priority,
        status: Status::Open,
    }
}

#[tokio::test]
async fn health_check_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    svc.health_check().await.unwrap();
}

#[tokio::test]
async fn task_list_crud_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    // Create
    let list = svc
        .create_task_list(&NewTaskList::empty("Home".into(), Some("chores".into())))
        .await
        .unwrap();
    assert!(!list.id.is_empty());
    assert_eq!(list.title, "Home");
    assert_eq!(list.count, Some(0));

    // Get
    let fetched = svc.get_task_list(&list.id).await.unwrap();
    assert_eq!(fetched.id, list.id);
    assert_eq!(fetched.description.as_deref(), Some("chores"));

    // List
    let all = svc.list_task_lists().await.unwrap();
    assert_eq!(all.len(), 1);

    // Update
    let mut renamed = fetched.clone();
    renamed.title = "House".into();
    let updated = svc.update_task_list(&list.id, &renamed).await.unwrap();
    assert_eq!(updated.title, "House");

    // Delete
    svc.delete_task_list(&list.id).await.unwrap();
    assert!(svc.list_task_lists().await.unwrap().is_empty());
}

#[tokio::test]
async fn task_crud_via_http() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let list = svc
        .create_task_list(&NewTaskList::empty("Work".into(), None))
        .await
        .unwrap();

    // Create
    let mut input = new_task("Write report", Priority::High);
    input.due_date = Some("2024-05-01T00:00:00.000Z".into());
    let task = svc.create_task(&list.id, &input).await.unwrap();
    assert_eq!(task.title, "Write report");
    assert_eq!(task.status, Status::Open);
    assert_eq!(task.due_date.as_deref(), Some("2024-05-01T00:00:00.000Z"));

    // Get
    let fetched = svc.get_task(&list.id, &task.id).await.unwrap();
    assert_eq!(fetched, task);

    // Update (full task body)
    let closed = task.with_toggled_status();
    let updated = svc.update_task(&list.id, &task.id, &closed).await.unwrap();
    assert_eq!(updated.status, Status::Closed);

    // List reflects the update
    let all = svc.list_tasks(&list.id).await.unwrap();
    assert_eq!(all, vec![updated]);

    // Delete
    svc.delete_task(&list.id, &task.id).await.unwrap();
    assert!(svc.list_tasks(&list.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_summary_reports_count_and_progress() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let list = svc
        .create_task_list(&NewTaskList::empty("Errands".into(), None))
        .await
        .unwrap();

    let a = svc.create_task(&list.id, &new_task("a", Priority::Low)).await.unwrap();
    svc.create_task(&list.id, &new_task("b", Priority::Low)).await.unwrap();
    svc.update_task(&list.id, &a.id, &a.with_toggled_status())
        .await
        .unwrap();

    let summary = svc.get_task_list(&list.id).await.unwrap();
    assert_eq!(summary.count, Some(2));
    assert_eq!(summary.progress, Some(0.5));
}

#[tokio::test]
async fn deleting_a_list_removes_its_tasks() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let list = svc
        .create_task_list(&NewTaskList::empty("Temp".into(), None))
        .await
        .unwrap();
    svc.create_task(&list.id, &new_task("x", Priority::Medium))
        .await
        .unwrap();

    svc.delete_task_list(&list.id).await.unwrap();
    assert!(svc.list_tasks(&list.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_list_is_a_status_error() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let err = svc.get_task_list("nope").await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        ServiceError::Status {
            operation,
            status,
            message,
        } => {
            assert_eq!(operation, "failed to fetch task list");
            assert_eq!(status, 404);
            assert_eq!(message, "Task list not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_with_mismatched_id_is_rejected() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);
    let list = svc
        .create_task_list(&NewTaskList::empty("A".into(), None))
        .await
        .unwrap();

    let err = svc.update_task_list("other-id", &list).await.unwrap_err();
    assert!(matches!(err, ServiceError::Status { status: 400, .. }));
    assert_eq!(err.operation(), "failed to update task list");
}

#[tokio::test]
async fn empty_title_is_rejected_by_server() {
    let url = spawn_server().await;
    let svc = HttpService::new(&url);

    let err = svc
        .create_task_list(&NewTaskList::empty(String::new(), None))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Status { status: 400, .. }));
    assert!(err.to_string().contains("TaskList title is empty"));
}
