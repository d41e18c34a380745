//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Report-a-new-emergency request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmergencyRequest {
    /// Short human label.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Free-text description.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Severity level, 1 through 10.
    #[validate(range(min = 1, max = 10, message = "Level must be between 1 and 10"))]
    pub level: i32,
    /// Latitude of the incident.
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude of the incident.
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Claim-participation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApplyRequest {
    /// The claiming volunteer.
    #[validate(range(min = 1, message = "volunteer_id must be positive"))]
    pub volunteer_id: i64,
}

/// Account creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password; hashed before storage.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Credential check query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsQuery {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Optional location hint for the emergency listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ListEmergenciesQuery {
    /// Latitude of the requesting client.
    pub lat: Option<f64>,
    /// Longitude of the requesting client.
    pub lon: Option<f64>,
}
