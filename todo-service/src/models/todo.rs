use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            task: task.into(),
            completed: false,
        }
    }
}

/// Parse a path id into an `ObjectId`.
///
/// A malformed id is reported as a store failure, not as a client error, so
/// callers see the same 500 they would get from the database itself.
pub fn parse_todo_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|e| {
        AppError::DatabaseError(anyhow::anyhow!("Invalid todo id '{}': {}", id, e))
    })
}
