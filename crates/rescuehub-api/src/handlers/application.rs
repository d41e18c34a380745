//! Application (claim) handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use rescuehub_core::error::AppError;

use crate::dto::request::ApplyRequest;
use crate::dto::response::{ApiResponse, ApplicantListResponse, ApplicantResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/emergencies/{id}/applications
pub async fn apply(
    State(state): State<AppState>,
    Path(emergency_id): Path<i64>,
    Json(req): Json<ApplyRequest>,
) -> Result<Json<ApiResponse<ApplicantListResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let applicants = state
        .application_service
        .apply(emergency_id, req.volunteer_id)
        .await?;

    Ok(Json(ApiResponse::ok(ApplicantListResponse {
        applicants: applicants.into_iter().map(ApplicantResponse::from).collect(),
    })))
}

/// GET /api/emergencies/{id}/applications
pub async fn list_applicants(
    State(state): State<AppState>,
    Path(emergency_id): Path<i64>,
) -> Result<Json<ApiResponse<ApplicantListResponse>>, ApiError> {
    let applicants = state.application_service.list_applicants(emergency_id).await?;

    Ok(Json(ApiResponse::ok(ApplicantListResponse {
        applicants: applicants.into_iter().map(ApplicantResponse::from).collect(),
    })))
}
