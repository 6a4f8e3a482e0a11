//! Map handlers: layout JSON, rendered SVG, and navigation from the map.

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use foilflow_core::WizardView;

use crate::error::ApiError;
use crate::schema::map::{MapLayoutResponse, MapQuery};
use crate::state::AppState;

/// Returns the layered layout for the given viewport.
///
/// `GET /api/map/layout?width=&height=`
pub async fn get_layout(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapLayoutResponse>, ApiError> {
    let service = state.service.lock().await;
    let response = service.map_layout(query.width, query.height)?;
    Ok(Json(response))
}

/// Returns the map as a standalone SVG document.
///
/// `GET /api/map.svg?width=&height=`
pub async fn get_svg(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let service = state.service.lock().await;
    let svg = service.map_svg(query.width, query.height)?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml; charset=utf-8")], svg))
}

/// Jumps the wizard to a node picked on the map and switches to the wizard
/// view.
///
/// `POST /api/map/nodes/{id}/navigate`
pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WizardView>, ApiError> {
    let mut service = state.service.lock().await;
    let view = service.navigate_from_map(&id)?;
    Ok(Json(view))
}
