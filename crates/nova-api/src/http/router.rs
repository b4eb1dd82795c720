//! Axum router configuration with middleware.
//!
//! Routes sit at the root, matching the paths existing web clients call.
//! Middleware: CORS (any origin), tracing.

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
        .route("/ask", post(handlers::conversation::ask))
        .route("/history", get(handlers::conversation::history))
        .route("/clear-history", post(handlers::conversation::clear_history))
        .route("/journal", get(handlers::journal::journal))
        .route("/summarize-journal", get(handlers::journal::summarize_journal))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
