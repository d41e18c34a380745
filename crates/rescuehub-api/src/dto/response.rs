//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rescuehub_entity::application::Applicant;
use rescuehub_entity::emergency::Emergency;
use rescuehub_entity::volunteer::Volunteer;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Identity of a newly created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse {
    /// The assigned id.
    pub id: i64,
}

/// One emergency in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyResponse {
    /// Emergency id.
    pub id: i64,
    /// Short human label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Severity level.
    pub level: i32,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// When the emergency was reported.
    pub created_at: DateTime<Utc>,
}

impl From<Emergency> for EmergencyResponse {
    fn from(e: Emergency) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            level: e.level,
            latitude: e.latitude,
            longitude: e.longitude,
            created_at: e.created_at,
        }
    }
}

/// One applicant in an applicant list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantResponse {
    /// The claiming volunteer's id.
    pub volunteer_id: i64,
    /// The volunteer's display name.
    pub name: String,
    /// When the claim was made.
    pub applied_at: DateTime<Utc>,
}

impl From<Applicant> for ApplicantResponse {
    fn from(a: Applicant) -> Self {
        Self {
            volunteer_id: a.volunteer_id,
            name: a.name,
            applied_at: a.applied_at,
        }
    }
}

/// Ordered applicant list for one emergency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantListResponse {
    /// Applicants in application order (first responder first).
    pub applicants: Vec<ApplicantResponse>,
}

/// Resolution outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    /// Always true on success.
    pub resolved: bool,
    /// Number of volunteers credited.
    pub credited: u64,
}

/// Volunteer profile for responses. Never includes the password hash or
/// the certification blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerResponse {
    /// Volunteer id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Whether an administrator approved the certification.
    pub verified: bool,
    /// Administrator flag.
    pub is_admin: bool,
    /// Whether a certification artifact has been uploaded.
    pub has_certificate: bool,
    /// Cumulative reputation score.
    pub reputation: i32,
    /// Resolved emergencies participated in.
    pub emergencies_completed: i32,
}

impl From<Volunteer> for VolunteerResponse {
    fn from(v: Volunteer) -> Self {
        Self {
            id: v.id,
            name: v.name,
            email: v.email,
            verified: v.verified,
            is_admin: v.is_admin,
            has_certificate: v.has_certificate,
            reputation: v.reputation,
            emergencies_completed: v.emergencies_completed,
        }
    }
}

/// Credential check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialCheckResponse {
    /// Always true on success; failures are structured 401 errors.
    pub valid: bool,
    /// The matched volunteer's profile.
    #[serde(flatten)]
    pub volunteer: VolunteerResponse,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
