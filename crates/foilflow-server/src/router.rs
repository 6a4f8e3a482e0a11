//! Router assembly for the Foil Flow HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS and
//! tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Browser client
        .route("/", get(handlers::ui::index))
        .route("/app.js", get(handlers::ui::app_js))
        .route("/styles.css", get(handlers::ui::styles_css))
        // Content
        .route("/api/graph", get(handlers::content::get_graph))
        .route("/api/validation", get(handlers::content::get_validation))
        .route("/api/nodes/{id}", get(handlers::content::get_node))
        // Wizard
        .route("/api/wizard", get(handlers::wizard::get_wizard))
        .route("/api/wizard/answer", post(handlers::wizard::answer))
        .route("/api/wizard/progress", post(handlers::wizard::progress))
        .route("/api/wizard/select", post(handlers::wizard::select))
        .route("/api/wizard/start-over", post(handlers::wizard::start_over))
        .route("/api/wizard/restart", post(handlers::wizard::restart))
        .route(
            "/api/wizard/history/{index}/jump",
            post(handlers::wizard::jump_to_history),
        )
        .route("/api/wizard/view", post(handlers::wizard::set_view))
        // Map
        .route("/api/map/layout", get(handlers::map::get_layout))
        .route("/api/map.svg", get(handlers::map::get_svg))
        .route(
            "/api/map/nodes/{id}/navigate",
            post(handlers::map::navigate),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
