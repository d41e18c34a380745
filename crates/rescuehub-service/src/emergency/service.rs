//! Emergency query, creation, and resolution operations.

use std::sync::Arc;

use tracing::info;

use rescuehub_core::config::emergencies::EmergenciesConfig;
use rescuehub_core::error::AppError;
use rescuehub_database::repositories::emergency::EmergencyRepository;
use rescuehub_entity::emergency::{CreateEmergency, Emergency, MAX_LEVEL, MIN_LEVEL};

use super::proximity;

/// An optional location hint for the listing operation.
#[derive(Debug, Clone, Copy)]
pub struct LocationHint {
    /// Latitude of the requesting client.
    pub latitude: f64,
    /// Longitude of the requesting client.
    pub longitude: f64,
}

/// Handles emergency listing, reporting, and resolution.
#[derive(Debug, Clone)]
pub struct EmergencyService {
    /// Emergency repository.
    emergency_repo: Arc<EmergencyRepository>,
    /// Listing settings (proximity radius).
    config: EmergenciesConfig,
}

impl EmergencyService {
    /// Creates a new emergency service.
    pub fn new(emergency_repo: Arc<EmergencyRepository>, config: EmergenciesConfig) -> Self {
        Self {
            emergency_repo,
            config,
        }
    }

    /// Lists all open emergencies, most severe first.
    ///
    /// With a location hint only emergencies within the configured radius
    /// are returned. Read-only; a store failure propagates as a
    /// retryable unavailable error rather than an empty list.
    pub async fn list(&self, hint: Option<LocationHint>) -> Result<Vec<Emergency>, AppError> {
        let emergencies = self.emergency_repo.find_all_by_level_desc().await?;

        Ok(match hint {
            Some(hint) => emergencies
                .into_iter()
                .filter(|e| {
                    proximity::within_radius(
                        hint.latitude,
                        hint.longitude,
                        e.latitude,
                        e.longitude,
                        self.config.radius_km,
                    )
                })
                .collect(),
            None => emergencies,
        })
    }

    /// Loads one emergency by id.
    pub async fn get(&self, id: i64) -> Result<Emergency, AppError> {
        self.emergency_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Emergency {id} not found")))
    }

    /// Reports a new emergency with an empty applicant set.
    pub async fn create(&self, data: CreateEmergency) -> Result<Emergency, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if data.description.trim().is_empty() {
            return Err(AppError::validation("Description is required"));
        }
        if !Emergency::level_in_range(data.level) {
            return Err(AppError::validation(format!(
                "Level must be between {MIN_LEVEL} and {MAX_LEVEL}"
            )));
        }
        if !data.latitude.is_finite() || !(-90.0..=90.0).contains(&data.latitude) {
            return Err(AppError::validation("Latitude must be between -90 and 90"));
        }
        if !data.longitude.is_finite() || !(-180.0..=180.0).contains(&data.longitude) {
            return Err(AppError::validation(
                "Longitude must be between -180 and 180",
            ));
        }

        let emergency = self.emergency_repo.create(&data).await?;

        info!(
            emergency_id = emergency.id,
            level = emergency.level,
            "Emergency reported"
        );

        Ok(emergency)
    }

    /// Resolves an emergency, crediting every applicant, and removes it.
    /// Returns the number of credited volunteers.
    pub async fn resolve(&self, id: i64) -> Result<u64, AppError> {
        let credited = self.emergency_repo.resolve(id).await?;

        info!(emergency_id = id, credited, "Emergency resolved");

        Ok(credited)
    }
}
