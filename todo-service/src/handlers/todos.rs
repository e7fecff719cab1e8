use crate::dtos::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use crate::extract::AppJson;
use crate::services::record_todo_operation;
use crate::startup::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;

const NOT_FOUND_MESSAGE: &str = "Task not found";

fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!(NOT_FOUND_MESSAGE))
}

fn observe<T>(operation: &'static str, result: &Result<T, AppError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(AppError::NotFound(_)) => "not_found",
        Err(_) => "error",
    };
    record_todo_operation(operation, outcome);
}

#[tracing::instrument(skip(state, request))]
pub async fn create_todo(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let result = state.store.create(request.task).await;
    observe("create", &result);
    let todo = result?;

    tracing::info!(todo_id = %todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

#[tracing::instrument(skip(state))]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoResponse>>, AppError> {
    let result = state.store.list().await;
    observe("list", &result);

    Ok(Json(result?.into_iter().map(TodoResponse::from).collect()))
}

#[tracing::instrument(skip(state, request))]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, AppError> {
    let result = state
        .store
        .set_completed(&id, request.completed)
        .await
        .and_then(|todo| todo.ok_or_else(not_found));
    observe("update", &result);
    let todo = result?;

    tracing::info!(todo_id = %id, completed = todo.completed, "Todo updated");

    Ok(Json(TodoResponse::from(todo)))
}

#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let result = state
        .store
        .delete(&id)
        .await
        .and_then(|todo| todo.ok_or_else(not_found));
    observe("delete", &result);
    result?;

    tracing::info!(todo_id = %id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
