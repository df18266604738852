use axum::response::Redirect;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::checkins;
use super::health;
use super::state::AppState;

/// Create the JSON API router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route(
            "/api/checkins",
            post(checkins::check_in).get(checkins::list_attendees),
        )
        .route("/api/summary", get(checkins::get_summary))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create the router that also serves the event page from `public/`
pub fn create_router_with_ui(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route(
            "/api/checkins",
            post(checkins::check_in).get(checkins::list_attendees),
        )
        .route("/api/summary", get(checkins::get_summary))
        .nest_service(
            "/ui",
            ServeDir::new("public").fallback(ServeFile::new("public/index.html")),
        )
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
