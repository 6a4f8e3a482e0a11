//! Content graph handlers: corpus dump, validation report, inspector.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use foilflow_core::ValidationReport;
use foilflow_layout::InspectorView;

use crate::error::ApiError;
use crate::state::AppState;

/// Returns the whole corpus with its fingerprint as the `ETag`.
///
/// `GET /api/graph`
pub async fn get_graph(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let service = state.service.lock().await;
    let etag = format!("\"{}\"", service.fingerprint());

    let etag_value = match HeaderValue::from_str(&etag) {
        Ok(v) => v,
        Err(e) => return ApiError::InternalError(e.to_string()).into_response(),
    };

    if matches_etag(&headers, &etag) {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag_value)]).into_response();
    }

    let response = service.graph_response();
    ([(header::ETAG, etag_value)], Json(response)).into_response()
}

/// True when `If-None-Match` names `etag` or is `*`.
fn matches_etag(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .any(|tag| tag == "*" || tag == etag || tag.strip_prefix("W/") == Some(etag))
}

/// Returns the corpus validation report.
///
/// `GET /api/validation`
pub async fn get_validation(State(state): State<AppState>) -> Json<ValidationReport> {
    let service = state.service.lock().await;
    Json(service.validation())
}

/// Returns the inspector view of one node.
///
/// `GET /api/nodes/{id}`
pub async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InspectorView>, ApiError> {
    let service = state.service.lock().await;
    let view = service.inspect(&id)?;
    Ok(Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_if_none_match(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::IF_NONE_MATCH, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn etag_matching() {
        assert!(matches_etag(&with_if_none_match("\"abc\""), "\"abc\""));
        assert!(matches_etag(&with_if_none_match("\"x\", \"abc\""), "\"abc\""));
        assert!(matches_etag(&with_if_none_match("W/\"abc\""), "\"abc\""));
        assert!(matches_etag(&with_if_none_match("*"), "\"abc\""));
        assert!(!matches_etag(&with_if_none_match("\"other\""), "\"abc\""));
        assert!(!matches_etag(&HeaderMap::new(), "\"abc\""));
    }
}
