//! Emergency entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lowest accepted severity level.
pub const MIN_LEVEL: i32 = 1;
/// Highest accepted severity level.
pub const MAX_LEVEL: i32 = 10;

/// A reported incident awaiting volunteer response.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Emergency {
    /// Unique emergency identifier.
    pub id: i64,
    /// Short human label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Severity level, 1 (minor) through 10 (critical).
    pub level: i32,
    /// Latitude of the incident.
    pub latitude: f64,
    /// Longitude of the incident.
    pub longitude: f64,
    /// When the emergency was reported.
    pub created_at: DateTime<Utc>,
}

impl Emergency {
    /// Check whether a severity level is inside the accepted range.
    pub fn level_in_range(level: i32) -> bool {
        (MIN_LEVEL..=MAX_LEVEL).contains(&level)
    }
}

/// Data required to report a new emergency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmergency {
    /// Short human label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Severity level.
    pub level: i32,
    /// Latitude of the incident.
    pub latitude: f64,
    /// Longitude of the incident.
    pub longitude: f64,
}
