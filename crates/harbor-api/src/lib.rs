//! harbor-api
//!
//! HTTP surface for the website: the assessment question bank and scoring,
//! the program catalog, and profile avatar upload/delete.

pub mod auth;
pub mod config;
mod error;
mod middleware;
mod routes;
pub mod state;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Oversized files must still reach the validator so the user sees its message.
    let upload_limit = state.upload_body_limit();

    let profile = Router::new()
        .route(
            "/profile/avatar",
            put(routes::avatar::upload_avatar).delete(routes::avatar::delete_avatar),
        )
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ))
        .layer(DefaultBodyLimit::max(upload_limit));

    Router::new()
        // Public
        .route("/health", get(routes::health::health_check))
        .route("/assessment/questions", get(routes::assessment::list_questions))
        .route("/assessment/result", post(routes::assessment::score_answers))
        .route("/programs", get(routes::programs::list_programs))
        .route("/programs/{id}", get(routes::programs::get_program_detail))
        // Authenticated
        .merge(profile)
        .layer(axum_mw::from_fn(middleware::access_log::access_log))
        .layer(cors)
        .with_state(state)
}
