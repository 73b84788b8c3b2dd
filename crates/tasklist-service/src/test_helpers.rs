//! In-memory implementation of the task-list API for tests.
//!
//! Mirrors the server's observable rules: server-assigned ids, computed
//! `count`/`progress`, create defaults, id-mismatch rejection, and cascading
//! list deletion.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tasklist_core::{Priority, Status, Task, TaskList};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct StoredList {
    id: String,
    title: String,
    description: Option<String>,
    tasks: Vec<Task>,
}

impl StoredList {
    fn to_dto(&self) -> TaskList {
        let closed = self.tasks.iter().filter(|t| t.is_closed()).count();
        let progress = if self.tasks.is_empty() {
            0.0
        } else {
            closed as f64 / self.tasks.len() as f64
        };
        TaskList {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            count: Some(self.tasks.len() as i64),
            progress: Some(progress),
            tasks: Some(self.tasks.clone()),
        }
    }
}

type Shared = Arc<Mutex<Vec<StoredList>>>;
type ApiError = (StatusCode, Json<Value>);

fn error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "message": message,
            "details": "",
        })),
    )
}

fn lock(state: &Shared) -> Result<std::sync::MutexGuard<'_, Vec<StoredList>>, ApiError> {
    state
        .lock()
        .map_err(|_| error(StatusCode::INTERNAL_SERVER_ERROR, "state poisoned"))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListBody {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskBody {
    id: Option<String>,
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    due_date: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
}

/// Build the API router with an empty data set, rooted at `/api`.
pub fn test_router() -> Router {
    let state: Shared = Arc::new(Mutex::new(Vec::new()));
    Router::new()
        .route("/api/task-lists", get(list_lists).post(create_list))
        .route(
            "/api/task-lists/{id}",
            get(get_list).put(update_list).delete(delete_list),
        )
        .route(
            "/api/task-lists/{list_id}/tasks",
            get(list_tasks).post(create_task),
        )
        .route(
            "/api/task-lists/{list_id}/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .with_state(state)
}

async fn list_lists(State(state): State<Shared>) -> Result<Json<Vec<TaskList>>, ApiError> {
    let lists = lock(&state)?;
    Ok(Json(lists.iter().map(StoredList::to_dto).collect()))
}

async fn get_list(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<TaskList>, ApiError> {
    let lists = lock(&state)?;
    lists
        .iter()
        .find(|l| l.id == id)
        .map(|l| Json(l.to_dto()))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Task list not found"))
}

async fn create_list(
    State(state): State<Shared>,
    Json(body): Json<ListBody>,
) -> Result<Json<TaskList>, ApiError> {
    if body.id.is_some() {
        return Err(error(StatusCode::BAD_REQUEST, "TaskList id already exists"));
    }
    let title = body.title.unwrap_or_default();
    if title.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "TaskList title is empty"));
    }
    let stored = StoredList {
        id: uuid::Uuid::new_v4().to_string(),
        title,
        description: body.description,
        tasks: Vec::new(),
    };
    let dto = stored.to_dto();
    lock(&state)?.push(stored);
    Ok(Json(dto))
}

async fn update_list(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<ListBody>,
) -> Result<Json<TaskList>, ApiError> {
    if body.id.as_deref() != Some(id.as_str()) {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "Attempting updateTaskList with different id",
        ));
    }
    let mut lists = lock(&state)?;
    let list = lists
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Task list does not exist"))?;
    list.title = body.title.unwrap_or_default();
    list.description = body.description;
    Ok(Json(list.to_dto()))
}

async fn delete_list(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    lock(&state)?.retain(|l| l.id != id);
    Ok(StatusCode::OK)
}

async fn list_tasks(
    State(state): State<Shared>,
    Path(list_id): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let lists = lock(&state)?;
    let tasks = lists
        .iter()
        .find(|l| l.id == list_id)
        .map(|l| l.tasks.clone())
        .unwrap_or_default();
    Ok(Json(tasks))
}

async fn get_task(
    State(state): State<Shared>,
    Path((list_id, id)): Path<(String, String)>,
) -> Result<Json<Task>, ApiError> {
    let lists = lock(&state)?;
    lists
        .iter()
        .find(|l| l.id == list_id)
        .and_then(|l| l.tasks.iter().find(|t| t.id == id))
        .map(|t| Json(t.clone()))
        .ok_or_else(|| error(StatusCode::NOT_FOUND, "Task not found"))
}

async fn create_task(
    State(state): State<Shared>,
    Path(list_id): Path<String>,
    Json(body): Json<TaskBody>,
) -> Result<Json<Task>, ApiError> {
    if body.id.is_some() {
        return Err(error(StatusCode::BAD_REQUEST, "Task id is already set"));
    }
    let title = body.title.unwrap_or_default();
    if title.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Task title is empty"));
    }
    let mut lists = lock(&state)?;
    let list = lists
        .iter_mut()
        .find(|l| l.id == list_id)
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Task list not found"))?;
    let task = Task {
        id: uuid::Uuid::new_v4().to_string(),
        title,
        description: body.description.unwrap_or_default(),
        due_date: body.due_date,
        priority: body.priority.unwrap_or_default(),
        status: Status::Open,
    };
    list.tasks.push(task.clone());
    Ok(Json(task))
}

async fn update_task(
    State(state): State<Shared>,
    Path((list_id, id)): Path<(String, String)>,
    Json(body): Json<TaskBody>,
) -> Result<Json<Task>, ApiError> {
    if body.id.as_deref() != Some(id.as_str()) {
        return Err(error(StatusCode::BAD_REQUEST, "Task id does not match"));
    }
    let (Some(priority), Some(status)) = (body.priority, body.status) else {
        return Err(error(StatusCode::BAD_REQUEST, "Task priority or status is empty"));
    };
    let mut lists = lock(&state)?;
    let task = lists
        .iter_mut()
        .find(|l| l.id == list_id)
        .and_then(|l| l.tasks.iter_mut().find(|t| t.id == id))
        .ok_or_else(|| error(StatusCode::BAD_REQUEST, "Task not found"))?;
    task.title = body.title.unwrap_or_default();
    task.description = body.description.unwrap_or_default();
    task.due_date = body.due_date;
    task.priority = priority;
    task.status = status;
    Ok(Json(task.clone()))
}

async fn delete_task(
    State(state): State<Shared>,
    Path((list_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    if let Some(list) = lock(&state)?.iter_mut().find(|l| l.id == list_id) {
        list.tasks.retain(|t| t.id != id);
    }
    Ok(StatusCode::OK)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn the in-memory API on a random port. `base_url` already includes
/// the `/api` prefix (e.g. "http://127.0.0.1:12345/api").
pub async fn spawn_test_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}/api");
    let app = test_router();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
