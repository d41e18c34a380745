//! Emergency repository implementation.
//!
//! Holds the resolution transaction: crediting every applicant and
//! deleting the emergency are a single atomic unit. A crediting failure
//! must not delete the emergency, and a failed delete must not leave
//! credit applied.

use sqlx::PgPool;
use tracing::warn;

use rescuehub_core::error::AppError;
use rescuehub_core::result::AppResult;
use rescuehub_entity::emergency::{CreateEmergency, Emergency};

use super::map_sqlx_err;

/// Repository for emergency records and the resolution workflow.
#[derive(Debug, Clone)]
pub struct EmergencyRepository {
    pool: PgPool,
}

impl EmergencyRepository {
    /// Create a new emergency repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an emergency by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Emergency>> {
        sqlx::query_as::<_, Emergency>("SELECT * FROM emergencies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("Failed to find emergency by id", e))
    }

    /// List all open emergencies, most severe first.
    ///
    /// Insertion order breaks level ties so the listing is stable.
    pub async fn find_all_by_level_desc(&self) -> AppResult<Vec<Emergency>> {
        sqlx::query_as::<_, Emergency>("SELECT * FROM emergencies ORDER BY level DESC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_err("Failed to list emergencies", e))
    }

    /// Insert a new emergency with an empty applicant set.
    pub async fn create(&self, data: &CreateEmergency) -> AppResult<Emergency> {
        sqlx::query_as::<_, Emergency>(
            "INSERT INTO emergencies (name, description, level, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.level)
        .bind(data.latitude)
        .bind(data.longitude)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("Failed to create emergency", e))
    }

    /// Resolve an emergency: credit every applicant's reputation by the
    /// emergency's severity level and participation count by one, then
    /// delete the record. Returns the number of credited volunteers.
    ///
    /// Runs in one transaction with the emergency row locked, so a
    /// concurrent apply cannot slip an applicant in between crediting and
    /// deletion, and a partial failure rolls everything back.
    pub async fn resolve(&self, id: i64) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_err("Failed to begin resolve transaction", e))?;

        let level: Option<i32> =
            sqlx::query_scalar("SELECT level FROM emergencies WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| map_sqlx_err("Failed to lock emergency for resolution", e))?;

        let Some(level) = level else {
            return Err(AppError::not_found(format!("Emergency {id} not found")));
        };

        let applicant_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE emergency_id = $1")
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| map_sqlx_err("Failed to count applicants", e))?;

        let credited = sqlx::query(
            "UPDATE volunteers \
             SET reputation = reputation + $2, \
                 emergencies_completed = emergencies_completed + 1, \
                 updated_at = NOW() \
             WHERE id IN (SELECT volunteer_id FROM applications WHERE emergency_id = $1)",
        )
        .bind(id)
        .bind(level)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_err("Failed to credit applicants", e))?
        .rows_affected();

        // Every applicant id must still resolve to a volunteer. The FK
        // guarantees that for rows written through the API; this guards
        // rows edited outside it. Dropping the transaction here rolls
        // back any partial credit.
        if credited != applicant_count as u64 {
            warn!(
                emergency_id = id,
                expected = applicant_count,
                credited,
                "Applicant ids did not all resolve to volunteers; rolling back"
            );
            return Err(AppError::integrity(format!(
                "Emergency {id}: {applicant_count} applicants but only {credited} credited"
            )));
        }

        sqlx::query("DELETE FROM emergencies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_err("Failed to delete resolved emergency", e))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_err("Failed to commit resolve transaction", e))?;

        Ok(credited)
    }
}
