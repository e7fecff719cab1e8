pub mod health;
pub mod todos;
pub mod welcome;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use todos::{create_todo, delete_todo, list_todos, update_todo};
pub use welcome::welcome_page;
