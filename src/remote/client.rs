//! HTTP client for the remote task store.
//!
//! Wraps the fixed REST contract of the storage service: `GET /todos`,
//! `POST /todos`, `PUT /todos/{id}`, `DELETE /todos/{id}`. Every operation
//! performs exactly one round-trip; failures are returned to the caller for
//! user-facing reporting rather than retried.

use crate::domain::{Task, TaskId};
use crate::remote::error::StoreError;
use reqwest::{Client, StatusCode, Url};
use serde::{Deserialize, Serialize};

/// Response envelope for the list endpoint.
///
/// A missing `todos` key reads as an empty list; extra fields such as the
/// server's `count` are ignored.
#[derive(Debug, Deserialize)]
struct TaskListEnvelope {
    #[serde(default)]
    todos: Vec<Task>,
}

#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateBody<'a> {
    title: &'a str,
    description: &'a str,
    completed: bool,
}

/// Async client for the task storage service.
pub struct StoreClient {
    client: Client,
    base_url: Url,
}

impl StoreClient {
    /// Create a client for the service at `base_url`.
    ///
    /// The base path is normalized to end with `/` so that endpoint joins
    /// keep any path prefix the URL carries.
    pub fn new(mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the ordered sequence of all stored tasks
    pub async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let res = self
            .client
            .get(self.endpoint("todos")?)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status: status.as_u16(),
            });
        }

        let body: TaskListEnvelope = res
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(body.todos)
    }

    /// Create a task; the server assigns id, created_at and completed=false.
    ///
    /// The caller validates that `title` is non-empty before invoking this.
    pub async fn create_task(&self, title: &str, description: &str) -> Result<Task, StoreError> {
        let res = self
            .client
            .post(self.endpoint("todos")?)
            .json(&CreateBody { title, description })
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(StoreError::Server {
                status: status.as_u16(),
            });
        }

        res.json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Full replace of the mutable fields of an existing task
    pub async fn update_task(
        &self,
        id: &TaskId,
        title: &str,
        description: &str,
        completed: bool,
    ) -> Result<Task, StoreError> {
        let res = self
            .client
            .put(self.endpoint(&format!("todos/{}", id))?)
            .json(&UpdateBody {
                title,
                description,
                completed,
            })
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        match res.status() {
            status if status.is_success() => res
                .json()
                .await
                .map_err(|e| StoreError::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound { id: id.to_string() }),
            status => Err(StoreError::Server {
                status: status.as_u16(),
            }),
        }
    }

    /// Remove a task server-side; success carries no body
    pub async fn delete_task(&self, id: &TaskId) -> Result<(), StoreError> {
        let res = self
            .client
            .delete(self.endpoint(&format!("todos/{}", id))?)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        match res.status() {
            status if status.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(StoreError::NotFound { id: id.to_string() }),
            status => Err(StoreError::Server {
                status: status.as_u16(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        self.base_url
            .join(path)
            .map_err(|e| StoreError::Network(format!("invalid endpoint {}: {}", path, e)))
    }
}
