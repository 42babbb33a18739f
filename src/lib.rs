//! AcadIntel Server Library
//!
//! Exam-focused study material generator: canned textbook and question
//! datasets go in, paginated PDF booklets come out.
//!
//! # Modules
//!
//! - `content`: demo datasets and subject resolution
//! - `compose`: question/section matching and block composition
//! - `render`: PDF assembly
//! - `generate`: per-request orchestration
//! - `routes`: HTTP API

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod clock;
pub mod compose;
pub mod config;
pub mod content;
pub mod error;
pub mod generate;
pub mod render;
pub mod routes;
pub mod state;

use state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/health", get(health_check))
        .nest("/api/v1/generate", routes::generate::router())
        .nest("/api/v1/files", routes::files::router())
        .nest("/api/v1/catalog", routes::catalog::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
