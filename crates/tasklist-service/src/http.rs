use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tasklist_core::{NewTask, NewTaskList, Task, TaskList};
use tracing::debug;

use crate::{ServiceError, TaskListService};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Async HTTP client implementation of TaskListService.
/// Connects to a running task-list API server.
pub struct HttpService {
    base_url: String,
    client: Client,
}

impl HttpService {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check if the server is reachable by listing task lists.
    pub async fn health_check(&self) -> Result<(), ServiceError> {
        self.list_task_lists().await.map(|_| ())
    }

    async fn send(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ServiceError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| ServiceError::Transport {
                operation,
                message: e.to_string(),
            })?;
        debug!(status = %resp.status(), "{operation}");
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(parse_error(operation, resp).await)
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, ServiceError> {
        let builder = self.client.get(format!("{}{path}", self.base_url));
        let resp = self.send(operation, builder).await?;
        decode(operation, resp).await
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let builder = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body);
        let resp = self.send(operation, builder).await?;
        decode(operation, resp).await
    }

    async fn put_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        let builder = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body);
        let resp = self.send(operation, builder).await?;
        decode(operation, resp).await
    }

    async fn delete_req(&self, operation: &'static str, path: &str) -> Result<(), ServiceError> {
        let builder = self.client.delete(format!("{}{path}", self.base_url));
        self.send(operation, builder).await.map(|_| ())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    resp: reqwest::Response,
) -> Result<T, ServiceError> {
    resp.json::<T>().await.map_err(|e| ServiceError::Decode {
        operation,
        message: e.to_string(),
    })
}

/// The server reports failures as `{status, message, details}`; only the
/// message is kept. Any other body is dropped.
async fn parse_error(operation: &'static str, resp: reqwest::Response) -> ServiceError {
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["message"].as_str().map(String::from))
        .unwrap_or_default();
    ServiceError::Status {
        operation,
        status,
        message,
    }
}

#[async_trait]
impl TaskListService for HttpService {
    async fn list_task_lists(&self) -> Result<Vec<TaskList>, ServiceError> {
        self.get_json("failed to fetch task lists", "/task-lists")
            .await
    }

    async fn get_task_list(&self, id: &str) -> Result<TaskList, ServiceError> {
        self.get_json("failed to fetch task list", &format!("/task-lists/{id}"))
            .await
    }

    async fn create_task_list(&self, input: &NewTaskList) -> Result<TaskList, ServiceError> {
        self.post_json("failed to create task list", "/task-lists", input)
            .await
    }

    async fn update_task_list(
        &self,
        id: &str,
        list: &TaskList,
    ) -> Result<TaskList, ServiceError> {
        self.put_json(
            "failed to update task list",
            &format!("/task-lists/{id}"),
            list,
        )
        .await
    }

    async fn delete_task_list(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_req("failed to delete task list", &format!("/task-lists/{id}"))
            .await
    }

    async fn list_tasks(&self, list_id: &str) -> Result<Vec<Task>, ServiceError> {
        self.get_json(
            "failed to fetch tasks",
            &format!("/task-lists/{list_id}/tasks"),
        )
        .await
    }

    async fn get_task(&self, list_id: &str, id: &str) -> Result<Task, ServiceError> {
        self.get_json(
            "failed to fetch task",
            &format!("/task-lists/{list_id}/tasks/{id}"),
        )
        .await
    }

    async fn create_task(&self, list_id: &str, input: &NewTask) -> Result<Task, ServiceError> {
        self.post_json(
            "failed to create task",
            &format!("/task-lists/{list_id}/tasks"),
            input,
        )
        .await
    }

    async fn update_task(&self, list_id: &str, id: &str, task: &Task) -> Result<Task, ServiceError> {
        self.put_json(
            "failed to update task",
            &format!("/task-lists/{list_id}/tasks/{id}"),
            task,
        )
        .await
    }

    async fn delete_task(&self, list_id: &str, id: &str) -> Result<(), ServiceError> {
        self.delete_req(
            "failed to delete task",
            &format!("/task-lists/{list_id}/tasks/{id}"),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(HttpService::new("http://h/api/").base_url(), "http://h/api");
        assert_eq!(HttpService::new(DEFAULT_API_URL).base_url(), DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Bind then release a port so nothing is listening on it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let svc = HttpService::new(&format!("http://127.0.0.1:{port}/api"));
        let err = svc.list_task_lists().await.unwrap_err();
        assert!(matches!(err, ServiceError::Transport { .. }));
        assert_eq!(err.operation(), "failed to fetch task lists");
    }
}
