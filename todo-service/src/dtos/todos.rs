use crate::models::Todo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub task: String,
}

/// `completed` is required; a body without it is rejected rather than
/// treated as a no-op.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResponse {
    pub id: String,
    pub task: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.to_hex(),
            task: todo.task,
            completed: todo.completed,
        }
    }
}
