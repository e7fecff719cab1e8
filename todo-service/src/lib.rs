//! todo-service: CRUD API over a MongoDB collection of todo items.
pub mod config;
pub mod dtos;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
