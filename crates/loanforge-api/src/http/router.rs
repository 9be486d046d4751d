//! Axum router configuration with middleware.
//!
//! Routes live at the root: `/test`, `/generate-prompt`, `/auto-deploy`.
//! Middleware: open CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/test", get(handlers::status::server_status))
        .route("/generate-prompt", get(handlers::prompt::generate_prompt))
        .route("/auto-deploy", post(handlers::deploy::auto_deploy))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
