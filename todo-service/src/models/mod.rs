pub mod todo;

pub use todo::{parse_todo_id, Todo};
