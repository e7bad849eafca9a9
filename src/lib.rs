//! Authenticated task-list API.
//!
//! This library exposes the modules and the router constructor so that
//! integration tests can drive the service without binding a socket.
//! The main binary uses them through the `main.rs` entry point.

pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::TokenService;
use crate::services::{TaskStore, UserRegistry};

// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UserRegistry>,
    pub tasks: TaskStore,
    pub tokens: TokenService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Auth routes
        .route("/login", post(handlers::login))
        .route("/me", get(handlers::current_user))
        // Task routes
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id",
            patch(handlers::toggle_task).delete(handlers::delete_task),
        )
        // Add middleware
        .layer(from_fn_with_state(state.clone(), middleware::attach_identity))
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
