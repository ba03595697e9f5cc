//! HTTP request handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::types::*;
use crate::domain::{CreateTodoRequest, TodoId, TodoItem};
use crate::error::{TodoError, TodoResult};
use crate::resource::{ResourceResponse, ResourceStatus};
use crate::AppState;

/// Collection path for todo items.
pub const TODOS_PATH: &str = "/todos";

/// Path of a single todo item.
pub fn todo_location(id: TodoId) -> String {
    format!("{TODOS_PATH}/{id}")
}

impl From<ResourceStatus> for StatusCode {
    fn from(status: ResourceStatus) -> Self {
        match status {
            ResourceStatus::Ok => StatusCode::OK,
            ResourceStatus::Created => StatusCode::CREATED,
            ResourceStatus::NoContent => StatusCode::NO_CONTENT,
            ResourceStatus::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl<T: Serialize> IntoResponse for ResourceResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from(self.status);
        let mut response = if status == StatusCode::NO_CONTENT {
            status.into_response()
        } else {
            (status, Json(self.body)).into_response()
        };

        if let Some(id) = self.location {
            if let Ok(value) = HeaderValue::from_str(&todo_location(id)) {
                response.headers_mut().insert(header::LOCATION, value);
            }
        }

        response
    }
}

fn todo_not_found(id: TodoId) -> TodoError {
    TodoError::NotFound(format!("Todo {} not found", id))
}

/// Turn a path rejection into the service's JSON error shape.
fn path_id(path: Result<Path<TodoId>, PathRejection>) -> TodoResult<TodoId> {
    path.map(|Path(id)| id)
        .map_err(|e| TodoError::BadRequest(format!("Invalid todo id: {}", e.body_text())))
}

/// List all todo items in creation order.
///
/// GET /todos
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "All todo items", body = [TodoItem])
    ),
    tag = "todos"
)]
pub async fn list_todos(State(state): State<AppState>) -> ResourceResponse<Vec<TodoItem>> {
    state.resource.handle_list().await
}

/// Get a single todo item.
///
/// GET /todos/{id}
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo item", body = TodoItem),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos"
)]
pub async fn get_todo(
    State(state): State<AppState>,
    path: Result<Path<TodoId>, PathRejection>,
) -> TodoResult<Json<TodoItem>> {
    let id = path_id(path)?;

    let response = state.resource.handle_get(id).await;

    match (response.status, response.body) {
        (ResourceStatus::NotFound, _) | (_, None) => Err(todo_not_found(id)),
        (_, Some(item)) => Ok(Json(item)),
    }
}

/// Create a todo item. The server assigns `id` and `isCompleted`.
///
/// POST /todos
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoItem,
            headers(("Location" = String, description = "Path of the new todo"))),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Body does not match the todo shape")
    ),
    tag = "todos"
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> ResourceResponse<TodoItem> {
    state.resource.handle_create(request).await
}

/// Delete a todo item.
///
/// DELETE /todos/{id}
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos"
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    path: Result<Path<TodoId>, PathRejection>,
) -> TodoResult<StatusCode> {
    let id = path_id(path)?;

    match state.resource.handle_delete(id).await {
        ResourceStatus::NotFound => Err(todo_not_found(id)),
        status => Ok(status.into()),
    }
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        todos: state.resource.store().count().await,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
