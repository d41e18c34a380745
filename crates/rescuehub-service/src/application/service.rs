//! Application (claim) operations — the core state transition.

use std::sync::Arc;

use tracing::info;

use rescuehub_core::error::AppError;
use rescuehub_database::repositories::application::ApplicationRepository;
use rescuehub_database::repositories::emergency::EmergencyRepository;
use rescuehub_entity::application::Applicant;

/// Handles volunteer claims on emergencies.
#[derive(Debug, Clone)]
pub struct ApplicationService {
    /// Application repository.
    application_repo: Arc<ApplicationRepository>,
    /// Emergency repository (existence checks for reads).
    emergency_repo: Arc<EmergencyRepository>,
}

impl ApplicationService {
    /// Creates a new application service.
    pub fn new(
        application_repo: Arc<ApplicationRepository>,
        emergency_repo: Arc<EmergencyRepository>,
    ) -> Self {
        Self {
            application_repo,
            emergency_repo,
        }
    }

    /// Claims participation in an emergency for a volunteer and returns
    /// the ordered applicant list.
    ///
    /// Idempotent for repeated claims by the same volunteer; the entire
    /// read-modify-write runs as one database transaction (see
    /// [`ApplicationRepository::apply`]).
    pub async fn apply(
        &self,
        emergency_id: i64,
        volunteer_id: i64,
    ) -> Result<Vec<Applicant>, AppError> {
        if emergency_id <= 0 || volunteer_id <= 0 {
            return Err(AppError::validation("Identifiers must be positive"));
        }

        let applicants = self.application_repo.apply(emergency_id, volunteer_id).await?;

        info!(
            emergency_id,
            volunteer_id,
            applicants = applicants.len(),
            "Volunteer applied to emergency"
        );

        Ok(applicants)
    }

    /// Lists the ordered applicants for an emergency.
    ///
    /// Fails with not-found for an unknown emergency so an empty list
    /// always means "nobody applied yet".
    pub async fn list_applicants(&self, emergency_id: i64) -> Result<Vec<Applicant>, AppError> {
        if self.emergency_repo.find_by_id(emergency_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Emergency {emergency_id} not found"
            )));
        }

        self.application_repo.find_by_emergency(emergency_id).await
    }
}
