//! Volunteer repository implementation.

use sqlx::PgPool;

use rescuehub_core::error::AppError;
use rescuehub_core::result::AppResult;
use rescuehub_entity::volunteer::{Certificate, CreateVolunteer, Volunteer};

use super::map_sqlx_err;

/// Column list for [`Volunteer`] projections. The certificate blob is
/// deliberately excluded; it is loaded on its own via
/// [`VolunteerRepository::load_certificate`].
const VOLUNTEER_COLUMNS: &str = "id, name, email, password_hash, verified, is_admin, \
     has_certificate, reputation, emergencies_completed, created_at, updated_at";

/// Repository for volunteer CRUD and certification storage.
#[derive(Debug, Clone)]
pub struct VolunteerRepository {
    pool: PgPool,
}

impl VolunteerRepository {
    /// Create a new volunteer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a volunteer by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Volunteer>> {
        sqlx::query_as::<_, Volunteer>(&format!(
            "SELECT {VOLUNTEER_COLUMNS} FROM volunteers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("Failed to find volunteer by id", e))
    }

    /// Find a volunteer by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Volunteer>> {
        sqlx::query_as::<_, Volunteer>(&format!(
            "SELECT {VOLUNTEER_COLUMNS} FROM volunteers WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("Failed to find volunteer by email", e))
    }

    /// Create a new volunteer account.
    pub async fn create(&self, data: &CreateVolunteer) -> AppResult<Volunteer> {
        sqlx::query_as::<_, Volunteer>(&format!(
            "INSERT INTO volunteers (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING {VOLUNTEER_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("volunteers_email_key") =>
            {
                AppError::conflict("Email already registered")
            }
            _ => map_sqlx_err("Failed to create volunteer", e),
        })
    }

    /// Store a certification artifact on the volunteer row.
    pub async fn store_certificate(
        &self,
        id: i64,
        data: &[u8],
        content_type: &str,
        file_name: &str,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE volunteers \
             SET certificate = $2, certificate_content_type = $3, \
                 certificate_file_name = $4, certificate_file_size = $5, \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(data)
        .bind(content_type)
        .bind(file_name)
        .bind(data.len() as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("Failed to store certificate", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Volunteer {id} not found")));
        }
        Ok(())
    }

    /// Load a volunteer's certification artifact, if one was uploaded.
    pub async fn load_certificate(&self, id: i64) -> AppResult<Option<Certificate>> {
        sqlx::query_as::<_, Certificate>(
            "SELECT certificate, certificate_content_type, \
                    certificate_file_name, certificate_file_size \
             FROM volunteers \
             WHERE id = $1 AND certificate IS NOT NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("Failed to load certificate", e))
    }

    /// Mark a volunteer as verified (admin approval).
    pub async fn set_verified(&self, id: i64) -> AppResult<Volunteer> {
        sqlx::query_as::<_, Volunteer>(&format!(
            "UPDATE volunteers SET verified = TRUE, updated_at = NOW() \
             WHERE id = $1 RETURNING {VOLUNTEER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_err("Failed to set verified", e))?
        .ok_or_else(|| AppError::not_found(format!("Volunteer {id} not found")))
    }
}
