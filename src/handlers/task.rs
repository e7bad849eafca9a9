use axum::{
    extract::{Path, State},
    response::Json,
    Extension,
};
use serde_json::{json, Value};

use crate::auth::{self, AccessLevel};
use crate::errors::{ApiError, AppResult};
use crate::middleware::Caller;
use crate::models::{CreateTaskForm, Task, ToggleTaskForm};
use crate::AppState;

pub async fn list_tasks(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.tasks.list().await)
}

#[axum::debug_handler]
pub async fn create_task(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Json(form): Json<CreateTaskForm>,
) -> AppResult<Json<Task>> {
    auth::require(AccessLevel::Authenticated, caller.0.as_ref())?;
    // The gate guarantees an identity at this level
    let user = caller.0.ok_or(ApiError::NotAuthenticated)?;

    tracing::info!("User {} creating task", user.username);
    let task = state.tasks.create(form.text, user.username).await;
    Ok(Json(task))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
    Json(form): Json<ToggleTaskForm>,
) -> AppResult<Json<Task>> {
    auth::require(AccessLevel::Authenticated, caller.0.as_ref())?;

    // Any authenticated caller may toggle any task; there is no
    // ownership restriction on the done flag.
    let task = state.tasks.toggle(&id, form.done).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    auth::require(AccessLevel::Admin, caller.0.as_ref())?;

    state.tasks.delete(&id).await?;
    tracing::info!("Task {} deleted", id);
    Ok(Json(json!({ "deleted": true })))
}
