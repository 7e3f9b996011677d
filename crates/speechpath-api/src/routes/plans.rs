use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use speechpath_core::models::plan::{PlanDraft, PlanUpdate, TherapyPlan};
use speechpath_planner::request::PlanRequest;
use tracing::info;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlanRequest {
    pub patient_id: Uuid,
}

/// Resolve a plan draft without attaching it to a patient.
pub async fn generate_plan(
    State(state): State<AppState>,
    body: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanDraft>, ApiError> {
    let Json(request) = body?;
    let draft = state.resolver.resolve(&request).await?;
    Ok(Json(draft))
}

/// Generate and store the plan for an existing patient, replacing any
/// previous one.
pub async fn create_plan(
    State(state): State<AppState>,
    body: Result<Json<CreatePlanRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TherapyPlan>), ApiError> {
    let Json(CreatePlanRequest { patient_id }) = body?;
    let patient = state.store.get_patient(patient_id).await?;

    let language = state.language_policy.language_for(&patient);
    let draft = state
        .resolver
        .resolve(&PlanRequest::for_patient(&patient, &language))
        .await?;

    let plan = TherapyPlan::from_draft(&patient, draft);
    state.store.put_plan(&plan).await?;

    info!(
        patient_id = %patient_id,
        plan_id = %plan.id,
        links = plan.youtube_links.len(),
        "therapy plan created"
    );
    Ok((StatusCode::CREATED, Json(plan)))
}

pub async fn get_plan(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<TherapyPlan>, ApiError> {
    let Path(patient_id) = path?;
    let plan = state.store.get_plan(patient_id).await?;
    Ok(Json(plan))
}

/// Replace the plan's goals and activities wholesale.
pub async fn update_plan(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<PlanUpdate>, JsonRejection>,
) -> Result<Json<TherapyPlan>, ApiError> {
    let Path(patient_id) = path?;
    let Json(update) = body?;
    let mut plan = state.store.get_plan(patient_id).await?;
    plan.apply_update(update);
    state.store.put_plan(&plan).await?;

    info!(patient_id = %patient_id, plan_id = %plan.id, "therapy plan updated");
    Ok(Json(plan))
}

/// Called by the patient service when a patient is deleted.
pub async fn delete_plan(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<()>, ApiError> {
    let Path(patient_id) = path?;
    state.store.delete_plan(patient_id).await?;
    info!(patient_id = %patient_id, "therapy plan deleted");
    Ok(Json(()))
}
