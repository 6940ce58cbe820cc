//! Letters API - backend for letter rendering and saved documents
//!
//! Provides REST endpoints for:
//! - Template listing and resolution
//! - Letter rendering, plain-text export and print pages
//! - Saving and retrieving letters

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod state;

pub use config::ApiConfig;
pub use state::AppState;

/// Build the application router
pub fn app(state: Arc<AppState>) -> Router {
    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Templates
        .route("/api/templates", get(handlers::get_templates))
        .route("/api/templates/:family/:key", get(handlers::get_template))
        // Letters
        .route("/api/letters/render", post(handlers::render_letter))
        .route("/api/letters/export", post(handlers::export_letter))
        .route("/api/letters/print", post(handlers::print_letter))
        // Saved documents
        .route(
            "/api/documents",
            get(handlers::list_documents).post(handlers::save_document),
        )
        .route("/api/documents/:id", get(handlers::get_document))
        .route(
            "/api/documents/:id/download",
            get(handlers::download_document),
        )
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
