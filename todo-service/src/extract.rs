use axum::extract::FromRequest;
use service_core::error::AppError;

/// `axum::Json` whose rejection renders through `AppError`, so malformed
/// bodies get the same `{ "message": ... }` shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
