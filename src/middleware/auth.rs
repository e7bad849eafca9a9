use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::models::UserInfo;
use crate::AppState;

// Identity attached to every request; None means anonymous.
#[derive(Debug, Clone)]
pub struct Caller(pub Option<UserInfo>);

// Absent, malformed, or unverifiable bearer headers all degrade to an
// anonymous caller. Handlers decide whether anonymity is acceptable.
pub async fn attach_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let identity = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| state.tokens.verify(token.trim()));

    req.extensions_mut().insert(Caller(identity));
    next.run(req).await
}
