use axum::Json;
use axum::extract::State;
use speechpath_catalog::DiagnosisSummary;

use crate::state::AppState;

/// Recognized diagnoses and the age bands or severities they have templates for.
pub async fn list_diagnoses(State(state): State<AppState>) -> Json<Vec<DiagnosisSummary>> {
    Json(state.resolver.catalog().diagnoses().to_vec())
}
