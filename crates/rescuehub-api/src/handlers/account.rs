//! Account and credential handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use rescuehub_core::error::AppError;

use crate::dto::request::{CredentialsQuery, SignupRequest};
use crate::dto::response::{ApiResponse, CredentialCheckResponse, VolunteerResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/volunteers
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<VolunteerResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let volunteer = state
        .account_service
        .signup(&req.name, &req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(volunteer.into())))
}

/// GET /api/volunteers/{id}
pub async fn get_volunteer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<VolunteerResponse>>, ApiError> {
    let volunteer = state.account_service.get(id).await?;
    Ok(Json(ApiResponse::ok(volunteer.into())))
}

/// GET /api/auth/check?email=..&password=..
pub async fn check_credentials(
    State(state): State<AppState>,
    Query(query): Query<CredentialsQuery>,
) -> Result<Json<CredentialCheckResponse>, ApiError> {
    let volunteer = state
        .account_service
        .check_credentials(&query.email, &query.password)
        .await?;

    Ok(Json(CredentialCheckResponse {
        valid: true,
        volunteer: volunteer.into(),
    }))
}
