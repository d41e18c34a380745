//! Certification upload, download, and approval handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use rescuehub_core::error::AppError;

use crate::dto::response::{ApiResponse, MessageResponse, VolunteerResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/volunteers/{id}/certification — multipart upload
pub async fn submit_certification(
    State(state): State<AppState>,
    Path(volunteer_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            content_type = field.content_type().map(|s| s.to_string());
            data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?,
            );
        }
    }

    let data = data.ok_or_else(|| AppError::validation("Missing 'file' field"))?;
    let content_type =
        content_type.ok_or_else(|| AppError::validation("Missing file content type"))?;
    let file_name = file_name.unwrap_or_else(|| "certificate".to_string());

    state
        .certification_service
        .submit(volunteer_id, &file_name, &content_type, data)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Certification uploaded, pending approval".to_string(),
    })))
}

/// GET /api/volunteers/{id}/certification — download the stored artifact
pub async fn download_certification(
    State(state): State<AppState>,
    Path(volunteer_id): Path<i64>,
) -> Result<Response, ApiError> {
    let artifact = state.certification_service.get_artifact(volunteer_id).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.certificate_content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                artifact.certificate_file_name
            ),
        )
        .header(header::CONTENT_LENGTH, artifact.certificate.len())
        .body(Body::from(artifact.certificate))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// POST /api/volunteers/{id}/verify — admin approval
pub async fn approve_certification(
    State(state): State<AppState>,
    Path(volunteer_id): Path<i64>,
) -> Result<Json<ApiResponse<VolunteerResponse>>, ApiError> {
    let volunteer = state.certification_service.approve(volunteer_id).await?;
    Ok(Json(ApiResponse::ok(volunteer.into())))
}
