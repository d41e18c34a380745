//! Volunteer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered volunteer.
///
/// The certification blob itself is not part of this row model; it is
/// loaded separately as [`Certificate`] when needed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Volunteer {
    /// Unique volunteer identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address, unique case-insensitively.
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether an administrator has approved the uploaded certification.
    pub verified: bool,
    /// Whether this account has administrator rights.
    pub is_admin: bool,
    /// Whether a certification artifact has been uploaded.
    pub has_certificate: bool,
    /// Cumulative score; grows by the severity level of each resolved
    /// emergency this volunteer applied to. Never decremented.
    pub reputation: i32,
    /// Number of resolved emergencies this volunteer participated in.
    /// Never decremented.
    pub emergencies_completed: i32,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new volunteer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVolunteer {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// An uploaded certification artifact.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    /// Raw artifact bytes.
    pub certificate: Vec<u8>,
    /// Declared content type.
    pub certificate_content_type: String,
    /// Original file name.
    pub certificate_file_name: String,
    /// Size in bytes.
    pub certificate_file_size: i64,
}
