use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::AuthError;
use crate::state::AppState;

/// Bearer-token middleware.
///
/// Verifies the token and inserts `AuthUser`, keyed on the token subject, into
/// the request extensions. The same `AuthUser` is attached to the response so
/// the access log can attribute the request.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let user_id = bearer_token(&req)
        .ok_or(AuthError::MissingToken)
        .and_then(|token| state.verifier.subject(token))
        .map_err(|e| {
            tracing::debug!(error = %e, path = req.uri().path(), "unauthenticated request");
            StatusCode::UNAUTHORIZED
        })?;

    let user = AuthUser { user_id };
    req.extensions_mut().insert(user.clone());

    let mut response = next.run(req).await;
    response.extensions_mut().insert(user);
    Ok(response)
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Authenticated user.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}
