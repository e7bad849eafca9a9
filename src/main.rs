use std::sync::Arc;

use axum_tasklist::{
    app,
    auth::TokenService,
    config::Config,
    services::{TaskStore, UserRegistry},
    AppState,
};

#[tokio::main]
async fn main() {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().expect("Failed to load configuration");

    let state = AppState {
        registry: Arc::new(UserRegistry::seeded()),
        tasks: TaskStore::new(),
        tokens: TokenService::new(&config.auth.secret, config.auth.token_ttl_days),
    };

    let app = app(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Failed to start server");
}
