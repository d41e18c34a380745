//! Application (claim) repository implementation.
//!
//! The apply operation is the system's one genuine concurrency hazard: a
//! naive read-modify-write of the applicant list loses updates under
//! concurrent claims. Here the whole claim runs in a single transaction
//! against the join table, with a row lock on the emergency and a
//! uniqueness constraint on `(emergency_id, volunteer_id)`, so concurrent
//! applies serialize in the store and repeats are idempotent.

use sqlx::PgPool;

use rescuehub_core::error::AppError;
use rescuehub_core::result::AppResult;
use rescuehub_entity::application::Applicant;

use super::map_sqlx_err;

const APPLICANT_QUERY: &str = "SELECT a.volunteer_id, v.name, a.applied_at \
     FROM applications a \
     JOIN volunteers v ON v.id = a.volunteer_id \
     WHERE a.emergency_id = $1 \
     ORDER BY a.id ASC";

/// Repository for the volunteer-to-emergency claim relation.
#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    /// Create a new application repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a volunteer's claim on an emergency and return the ordered
    /// applicant list.
    ///
    /// Idempotent: applying twice leaves exactly one entry and returns
    /// the unchanged list. Returns not-found if either id does not
    /// resolve; the volunteer check runs first so no emergency state is
    /// touched for an unknown volunteer.
    pub async fn apply(&self, emergency_id: i64, volunteer_id: i64) -> AppResult<Vec<Applicant>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_err("Failed to begin apply transaction", e))?;

        let volunteer_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM volunteers WHERE id = $1)")
                .bind(volunteer_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| map_sqlx_err("Failed to resolve volunteer", e))?;
        if !volunteer_exists {
            return Err(AppError::not_found(format!(
                "Volunteer {volunteer_id} not found"
            )));
        }

        // Lock the emergency row for the duration of the claim. Multiple
        // server instances may run concurrently, so the lock must live in
        // the store, not in process memory.
        let emergency: Option<i64> =
            sqlx::query_scalar("SELECT id FROM emergencies WHERE id = $1 FOR UPDATE")
                .bind(emergency_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| map_sqlx_err("Failed to lock emergency", e))?;
        if emergency.is_none() {
            return Err(AppError::not_found(format!(
                "Emergency {emergency_id} not found"
            )));
        }

        sqlx::query(
            "INSERT INTO applications (emergency_id, volunteer_id) \
             VALUES ($1, $2) \
             ON CONFLICT (emergency_id, volunteer_id) DO NOTHING",
        )
        .bind(emergency_id)
        .bind(volunteer_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_err("Failed to record application", e))?;

        let applicants = sqlx::query_as::<_, Applicant>(APPLICANT_QUERY)
            .bind(emergency_id)
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| map_sqlx_err("Failed to list applicants", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_err("Failed to commit apply transaction", e))?;

        Ok(applicants)
    }

    /// List the ordered applicants for one emergency.
    pub async fn find_by_emergency(&self, emergency_id: i64) -> AppResult<Vec<Applicant>> {
        sqlx::query_as::<_, Applicant>(APPLICANT_QUERY)
            .bind(emergency_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("Failed to list applicants", e))
    }
}
