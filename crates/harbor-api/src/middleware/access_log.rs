use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use super::auth::AuthUser;

/// One structured event per request, with latency and, on authenticated
/// routes, the user the request was made for. 5xx responses log at `warn`.
pub async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let latency_ms = started.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    let user_id = response
        .extensions()
        .get::<AuthUser>()
        .map(|user| user.user_id.as_str());

    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, latency_ms, user_id, "request failed");
    } else {
        tracing::info!(%method, %path, status, latency_ms, user_id, "request served");
    }

    response
}
