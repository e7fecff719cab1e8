pub mod todos;

pub use todos::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
