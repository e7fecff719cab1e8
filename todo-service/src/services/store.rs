use crate::models::Todo;
use async_trait::async_trait;
use service_core::error::AppError;

/// Persistence seam for todos. Every method maps to exactly one store call.
///
/// `id` arguments are the hex form handed out to clients; implementations
/// report a malformed id as `AppError::DatabaseError`.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert a new, incomplete todo and return it with its assigned id.
    async fn create(&self, task: String) -> Result<Todo, AppError>;

    /// All todos in natural store order.
    async fn list(&self) -> Result<Vec<Todo>, AppError>;

    /// Set `completed` on one todo. `Ok(None)` when no todo has that id.
    async fn set_completed(&self, id: &str, completed: bool) -> Result<Option<Todo>, AppError>;

    /// Remove one todo, returning it. `Ok(None)` when no todo has that id.
    async fn delete(&self, id: &str) -> Result<Option<Todo>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
