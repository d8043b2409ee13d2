pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::applications::handlers;
use crate::resume::handlers::{handle_parse_resume, MAX_REQUEST_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume pre-fill
        .route(
            "/api/parse-resume",
            post(handle_parse_resume).layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES)),
        )
        // Applications
        .route("/api/submit", post(handlers::handle_submit))
        .route("/api/generate-pdf", post(handlers::handle_generate_pdf))
        .route("/api/applications", get(handlers::handle_list_applications))
        .route(
            "/api/applications/:id",
            get(handlers::handle_get_application),
        )
        // Landing page and static files
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}
