use axum::{extract::State, response::Json, Extension};
use serde::Serialize;

use crate::errors::AppResult;
use crate::middleware::Caller;
use crate::models::{LoginForm, UserInfo};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> AppResult<Json<LoginResponse>> {
    tracing::info!("Login attempt for user: {}", form.username);

    let user = state.registry.authenticate(&form.username, &form.password)?;
    let token = state.tokens.issue(&user)?;

    tracing::debug!("Issued credential for user: {}", user.username);
    Ok(Json(LoginResponse { token, user }))
}

// Whoever the bearer credential says the caller is, or null.
pub async fn current_user(Extension(caller): Extension<Caller>) -> Json<Option<UserInfo>> {
    Json(caller.0)
}
