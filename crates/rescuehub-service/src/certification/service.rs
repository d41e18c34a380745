//! Certification workflow — artifact upload and administrator approval.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use rescuehub_core::config::upload::UploadConfig;
use rescuehub_core::error::AppError;
use rescuehub_database::repositories::volunteer::VolunteerRepository;
use rescuehub_entity::volunteer::{Certificate, Volunteer};

/// Handles certification artifact storage and verification approval.
#[derive(Debug, Clone)]
pub struct CertificationService {
    /// Volunteer repository.
    volunteer_repo: Arc<VolunteerRepository>,
    /// Upload limits.
    config: UploadConfig,
}

impl CertificationService {
    /// Creates a new certification service.
    pub fn new(volunteer_repo: Arc<VolunteerRepository>, config: UploadConfig) -> Self {
        Self {
            volunteer_repo,
            config,
        }
    }

    /// Stores an uploaded credential artifact on the volunteer record.
    ///
    /// The artifact is treated as an opaque blob; only its size and
    /// declared content type are validated. Uploading does not by itself
    /// verify the volunteer — an administrator approves separately.
    pub async fn submit(
        &self,
        volunteer_id: i64,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<(), AppError> {
        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if data.len() as u64 > self.config.max_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the {} byte limit",
                self.config.max_size_bytes
            )));
        }
        if !self.config.allows_content_type(content_type) {
            return Err(AppError::validation(format!(
                "Content type '{content_type}' is not accepted"
            )));
        }

        self.volunteer_repo
            .store_certificate(volunteer_id, &data, content_type, file_name)
            .await?;

        info!(
            volunteer_id,
            size = data.len(),
            content_type,
            "Certification artifact stored"
        );

        Ok(())
    }

    /// Loads a volunteer's stored artifact.
    pub async fn get_artifact(&self, volunteer_id: i64) -> Result<Certificate, AppError> {
        self.volunteer_repo
            .load_certificate(volunteer_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Volunteer {volunteer_id} has no certification artifact"
                ))
            })
    }

    /// Approves a volunteer's certification (admin action).
    pub async fn approve(&self, volunteer_id: i64) -> Result<Volunteer, AppError> {
        let volunteer = self.volunteer_repo.set_verified(volunteer_id).await?;

        info!(volunteer_id, "Certification approved");

        Ok(volunteer)
    }
}
