use async_trait::async_trait;
use tasklist_core::{NewTask, NewTaskList, Task, TaskList};
use thiserror::Error;

/// A failed remote call. The server's error payload is not modelled beyond a
/// human-readable message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{operation}: connection failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("{operation} (HTTP {status}){}", detail(.message))]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("{operation}: json decode: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },
}

fn detail(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

impl ServiceError {
    /// The operation that failed, e.g. "failed to fetch task lists".
    pub fn operation(&self) -> &'static str {
        match self {
            ServiceError::Transport { operation, .. }
            | ServiceError::Status { operation, .. }
            | ServiceError::Decode { operation, .. } => operation,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Status { status: 404, .. })
    }
}

/// The remote CRUD API for task lists and the tasks scoped under them.
///
/// The client controller programs against this trait. `HttpService` talks to
/// the real server; tests substitute scripted implementations. Implementations
/// own no state: no retries, no caching.
#[async_trait]
pub trait TaskListService: Send + Sync {
    // -- Task lists --
    async fn list_task_lists(&self) -> Result<Vec<TaskList>, ServiceError>;
    async fn get_task_list(&self, id: &str) -> Result<TaskList, ServiceError>;
    async fn create_task_list(&self, input: &NewTaskList) -> Result<TaskList, ServiceError>;
    async fn update_task_list(&self, id: &str, list: &TaskList)
        -> Result<TaskList, ServiceError>;
    async fn delete_task_list(&self, id: &str) -> Result<(), ServiceError>;

    // -- Tasks --
    async fn list_tasks(&self, list_id: &str) -> Result<Vec<Task>, ServiceError>;
    async fn get_task(&self, list_id: &str, id: &str) -> Result<Task, ServiceError>;
    async fn create_task(&self, list_id: &str, input: &NewTask) -> Result<Task, ServiceError>;
    async fn update_task(&self, list_id: &str, id: &str, task: &Task)
        -> Result<Task, ServiceError>;
    async fn delete_task(&self, list_id: &str, id: &str) -> Result<(), ServiceError>;
}
