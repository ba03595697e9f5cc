//! Todo resource handler - maps store outcomes to resource statuses.
//!
//! Operates on already-parsed payloads and path ids. Turning a
//! [`ResourceResponse`] into an HTTP response is left to the API layer.

use crate::domain::{CreateTodoRequest, TodoId, TodoItem};
use crate::storage::TodoStore;

/// Transport-level outcome of a resource operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Ok,
    Created,
    NoContent,
    NotFound,
}

impl std::fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceStatus::Ok => write!(f, "ok"),
            ResourceStatus::Created => write!(f, "created"),
            ResourceStatus::NoContent => write!(f, "no_content"),
            ResourceStatus::NotFound => write!(f, "not_found"),
        }
    }
}

/// A response body together with its status and optional location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceResponse<T> {
    pub body: T,
    pub status: ResourceStatus,
    /// Id of the item the response points at, if any.
    pub location: Option<TodoId>,
}

impl<T> ResourceResponse<T> {
    fn ok(body: T) -> Self {
        Self {
            body,
            status: ResourceStatus::Ok,
            location: None,
        }
    }
}

/// Exposes list, get, create and delete over a shared [`TodoStore`].
#[derive(Debug, Clone)]
pub struct TodoResourceHandler {
    store: TodoStore,
}

impl TodoResourceHandler {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// List all items. Always `Ok`.
    pub async fn handle_list(&self) -> ResourceResponse<Vec<TodoItem>> {
        let items = self.store.list().await;
        tracing::debug!(count = items.len(), "Listed todos");
        ResourceResponse::ok(items)
    }

    /// Fetch one item, `NotFound` when the id is unknown.
    pub async fn handle_get(&self, id: TodoId) -> ResourceResponse<Option<TodoItem>> {
        match self.store.get(id).await {
            Some(item) => ResourceResponse::ok(Some(item)),
            None => ResourceResponse {
                body: None,
                status: ResourceStatus::NotFound,
                location: None,
            },
        }
    }

    /// Create an item from the request title.
    ///
    /// Any `id` or `isCompleted` in the request is ignored; the store assigns
    /// the id and new items always start incomplete.
    pub async fn handle_create(&self, request: CreateTodoRequest) -> ResourceResponse<TodoItem> {
        if request.id.is_some() || request.is_completed.is_some() {
            tracing::debug!(
                supplied_id = ?request.id,
                supplied_is_completed = ?request.is_completed,
                "Ignoring client-supplied fields"
            );
        }

        let item = self.store.create(request.title).await;

        tracing::info!(
            todo_id = item.id,
            title_len = item.title.len(),
            "Todo created"
        );

        ResourceResponse {
            location: Some(item.id),
            body: item,
            status: ResourceStatus::Created,
        }
    }

    /// Delete an item: `NoContent` when removed, `NotFound` otherwise.
    pub async fn handle_delete(&self, id: TodoId) -> ResourceStatus {
        let status = if self.store.delete(id).await {
            ResourceStatus::NoContent
        } else {
            ResourceStatus::NotFound
        };

        tracing::info!(todo_id = id, status = %status, "Todo delete handled");
        status
    }
}
