//! Application entity model — the join between volunteers and emergencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One volunteer's claim on one emergency.
///
/// `(emergency_id, volunteer_id)` is unique; `id` preserves insertion
/// order, so the first responder is always the row with the lowest id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    /// Unique application identifier (insertion order).
    pub id: i64,
    /// The claimed emergency.
    pub emergency_id: i64,
    /// The claiming volunteer.
    pub volunteer_id: i64,
    /// When the claim was made.
    pub applied_at: DateTime<Utc>,
}

/// An applicant projected with their display name, as returned by the
/// applicant-list operations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Applicant {
    /// The claiming volunteer.
    pub volunteer_id: i64,
    /// The volunteer's display name.
    pub name: String,
    /// When the claim was made.
    pub applied_at: DateTime<Utc>,
}
