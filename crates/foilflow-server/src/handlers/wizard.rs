//! Wizard handlers. Every action answers with the updated wizard view.

use axum::extract::{Path, State};
use axum::Json;
use foilflow_core::WizardView;

use crate::error::ApiError;
use crate::schema::wizard::{AnswerRequest, SelectRequest, ViewRequest};
use crate::state::AppState;

/// Returns the current wizard view.
///
/// `GET /api/wizard`
pub async fn get_wizard(State(state): State<AppState>) -> Json<WizardView> {
    let service = state.service.lock().await;
    Json(service.wizard_view())
}

/// Picks an option of the current question.
///
/// `POST /api/wizard/answer`
pub async fn answer(
    State(state): State<AppState>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<WizardView>, ApiError> {
    let mut service = state.service.lock().await;
    let view = service.answer(req.option)?;
    Ok(Json(view))
}

/// Follows the current result's progression link.
///
/// `POST /api/wizard/progress`
pub async fn progress(State(state): State<AppState>) -> Result<Json<WizardView>, ApiError> {
    let mut service = state.service.lock().await;
    let view = service.progress()?;
    Ok(Json(view))
}

/// Moves to an arbitrary node, recording `label` as the answer.
///
/// `POST /api/wizard/select`
pub async fn select(
    State(state): State<AppState>,
    Json(req): Json<SelectRequest>,
) -> Json<WizardView> {
    let mut service = state.service.lock().await;
    Json(service.select(&req.next_id, &req.label))
}

/// The "Start Over" action on result cards.
///
/// `POST /api/wizard/start-over`
pub async fn start_over(State(state): State<AppState>) -> Json<WizardView> {
    let mut service = state.service.lock().await;
    Json(service.start_over())
}

/// Back to root with empty history. View mode is kept.
///
/// `POST /api/wizard/restart`
pub async fn restart(State(state): State<AppState>) -> Json<WizardView> {
    let mut service = state.service.lock().await;
    Json(service.restart())
}

/// Returns to a node recorded in history, dropping it and everything after.
///
/// `POST /api/wizard/history/{index}/jump`
pub async fn jump_to_history(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<WizardView>, ApiError> {
    let mut service = state.service.lock().await;
    let view = service.jump_to_history(index)?;
    Ok(Json(view))
}

/// Switches between the wizard and map views.
///
/// `POST /api/wizard/view`
pub async fn set_view(
    State(state): State<AppState>,
    Json(req): Json<ViewRequest>,
) -> Json<WizardView> {
    let mut service = state.service.lock().await;
    Json(service.set_view(req.mode))
}
