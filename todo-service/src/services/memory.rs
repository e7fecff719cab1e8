use crate::models::{parse_todo_id, Todo};
use crate::services::TodoStore;
use async_trait::async_trait;
use service_core::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// In-process store for tests and local runs without MongoDB.
///
/// Insertion order is the iteration order. `set_available(false)` makes
/// every call fail the way an unreachable database would.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
    unavailable: AtomicBool,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_available(&self, available: bool) {
        self.unavailable.store(!available, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }

    fn ensure_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "in-memory store is unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn create(&self, task: String) -> Result<Todo, AppError> {
        self.ensure_available()?;
        let todo = Todo::new(task);
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.ensure_available()?;
        Ok(self.todos.read().await.clone())
    }

    async fn set_completed(&self, id: &str, completed: bool) -> Result<Option<Todo>, AppError> {
        self.ensure_available()?;
        let object_id = parse_todo_id(id)?;

        let mut todos = self.todos.write().await;
        Ok(todos.iter_mut().find(|t| t.id == object_id).map(|todo| {
            todo.completed = completed;
            todo.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<Option<Todo>, AppError> {
        self.ensure_available()?;
        let object_id = parse_todo_id(id)?;

        let mut todos = self.todos.write().await;
        Ok(todos
            .iter()
            .position(|t| t.id == object_id)
            .map(|index| todos.remove(index)))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ensure_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryTodoStore::new();
        store.create("first".to_string()).await.unwrap();
        store.create("second".to_string()).await.unwrap();

        let tasks: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.task)
            .collect();

        assert_eq!(tasks, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn set_completed_only_touches_the_flag() {
        let store = InMemoryTodoStore::new();
        let todo = store.create("walk dog".to_string()).await.unwrap();

        let updated = store
            .set_completed(&todo.id.to_hex(), true)
            .await
            .unwrap()
            .expect("todo should exist");

        assert_eq!(updated.id, todo.id);
        assert_eq!(updated.task, "walk dog");
        assert!(updated.completed);
    }

    #[tokio::test]
    async fn unknown_id_is_none_not_error() {
        let store = InMemoryTodoStore::new();
        let missing = ObjectId::new().to_hex();

        assert!(store.set_completed(&missing, true).await.unwrap().is_none());
        assert!(store.delete(&missing).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = InMemoryTodoStore::new();
        let keep = store.create("keep".to_string()).await.unwrap();
        let gone = store.create("drop".to_string()).await.unwrap();

        let removed = store.delete(&gone.id.to_hex()).await.unwrap();

        assert_eq!(removed.map(|t| t.id), Some(gone.id));
        assert_eq!(store.list().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_call() {
        let store = InMemoryTodoStore::new();
        store.set_available(false);

        assert!(matches!(
            store.create("x".to_string()).await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(store.list().await.is_err());
        assert!(store.health_check().await.is_err());

        store.set_available(true);
        assert!(store.health_check().await.is_ok());
    }
}
