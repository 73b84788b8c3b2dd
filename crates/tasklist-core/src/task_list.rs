use serde::{Deserialize, Serialize};

use crate::task::Task;

/// A named collection of tasks. `count` and `progress` are computed by the
/// server and may be absent; `tasks` is an optional embedded copy that may be
/// stale. The client's per-list cache is authoritative for task data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl TaskList {
    pub fn count_or_zero(&self) -> i64 {
        self.count.unwrap_or(0)
    }

    pub fn progress_or_zero(&self) -> f64 {
        self.progress.unwrap_or(0.0)
    }
}

/// Body of `POST /task-lists`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskList {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
}

impl NewTaskList {
    /// A fresh, empty list as the create form submits it.
    pub fn empty(title: String, description: Option<String>) -> Self {
        Self {
            title,
            description,
            count: Some(0),
            progress: Some(0.0),
            tasks: None,
        }
    }
}
