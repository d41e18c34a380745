//! Emergency listing, reporting, and resolution handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use rescuehub_core::error::AppError;
use rescuehub_entity::emergency::CreateEmergency;
use rescuehub_service::emergency::service::LocationHint;

use crate::dto::request::{CreateEmergencyRequest, ListEmergenciesQuery};
use crate::dto::response::{ApiResponse, EmergencyResponse, IdResponse, ResolveResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/emergencies?lat=..&lon=..
pub async fn list_emergencies(
    State(state): State<AppState>,
    Query(query): Query<ListEmergenciesQuery>,
) -> Result<Json<ApiResponse<Vec<EmergencyResponse>>>, ApiError> {
    let hint = match (query.lat, query.lon) {
        (Some(latitude), Some(longitude)) => Some(LocationHint {
            latitude,
            longitude,
        }),
        (None, None) => None,
        _ => {
            return Err(AppError::validation("Location hint requires both lat and lon").into());
        }
    };

    let emergencies = state.emergency_service.list(hint).await?;

    Ok(Json(ApiResponse::ok(
        emergencies.into_iter().map(EmergencyResponse::from).collect(),
    )))
}

/// GET /api/emergencies/{id}
pub async fn get_emergency(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<EmergencyResponse>>, ApiError> {
    let emergency = state.emergency_service.get(id).await?;
    Ok(Json(ApiResponse::ok(emergency.into())))
}

/// POST /api/emergencies
pub async fn create_emergency(
    State(state): State<AppState>,
    Json(req): Json<CreateEmergencyRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let emergency = state
        .emergency_service
        .create(CreateEmergency {
            name: req.name,
            description: req.description,
            level: req.level,
            latitude: req.latitude,
            longitude: req.longitude,
        })
        .await?;

    Ok(Json(ApiResponse::ok(IdResponse { id: emergency.id })))
}

/// DELETE /api/emergencies/{id}
pub async fn resolve_emergency(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ResolveResponse>>, ApiError> {
    let credited = state.emergency_service.resolve(id).await?;

    Ok(Json(ApiResponse::ok(ResolveResponse {
        resolved: true,
        credited,
    })))
}
