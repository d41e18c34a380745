//! Volunteer account operations — signup and credential checks.

use std::sync::Arc;

use tracing::info;

use rescuehub_core::error::AppError;
use rescuehub_database::repositories::volunteer::VolunteerRepository;
use rescuehub_entity::volunteer::{CreateVolunteer, Volunteer};

use super::password::PasswordHasher;

/// Handles account creation and credential validation.
#[derive(Debug, Clone)]
pub struct AccountService {
    /// Volunteer repository.
    volunteer_repo: Arc<VolunteerRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(volunteer_repo: Arc<VolunteerRepository>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            volunteer_repo,
            hasher,
        }
    }

    /// Creates a volunteer account.
    ///
    /// A duplicate email (case-insensitive) is a conflict and creates no
    /// record; uniqueness is enforced by the store, not a pre-check, so
    /// two concurrent signups cannot both succeed.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Volunteer, AppError> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if password.len() < 8 {
            return Err(AppError::validation(
                "Password must be at least 8 characters",
            ));
        }

        let password_hash = self.hasher.hash_password(password)?;

        let volunteer = self
            .volunteer_repo
            .create(&CreateVolunteer {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(volunteer_id = volunteer.id, "Volunteer account created");

        Ok(volunteer)
    }

    /// Checks a credential pair and returns the matching volunteer.
    ///
    /// Unknown email and wrong password produce the same authentication
    /// error, so the endpoint does not leak which emails are registered.
    pub async fn check_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Volunteer, AppError> {
        let volunteer = self
            .volunteer_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::authentication("Wrong credentials"))?;

        let valid = self
            .hasher
            .verify_password(password, &volunteer.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Wrong credentials"));
        }

        Ok(volunteer)
    }

    /// Loads a volunteer profile by id.
    pub async fn get(&self, id: i64) -> Result<Volunteer, AppError> {
        self.volunteer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Volunteer {id} not found")))
    }
}
