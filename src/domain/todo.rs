//! Todo item domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier assigned to a todo item by the store.
pub type TodoId = i64;

/// A single todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned identifier, starting at 1 and never reused.
    #[schema(value_type = i64)]
    pub id: TodoId,

    /// Free-form title. Empty and whitespace-only titles are valid.
    pub title: String,

    /// Completion flag. Always `false` on creation.
    pub is_completed: bool,
}

impl TodoItem {
    /// Create a new, not yet completed item with the given id.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_completed: false,
        }
    }
}

/// Payload accepted when creating a todo item.
///
/// Clients usually send a full item shape (`id: 0`, `isCompleted: false`).
/// Only `title` is used; the store assigns the rest.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    /// Title of the new item.
    #[serde(default)]
    pub title: String,

    /// Ignored.
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub id: Option<TodoId>,

    /// Ignored.
    #[serde(default)]
    pub is_completed: Option<bool>,
}

#[cfg(test)]
impl CreateTodoRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
