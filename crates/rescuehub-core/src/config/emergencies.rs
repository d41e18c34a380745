//! Emergency listing configuration.

use serde::{Deserialize, Serialize};

/// Settings for the emergency query service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergenciesConfig {
    /// Proximity radius in kilometers applied when the client supplies a
    /// location hint. Pending product confirmation; 2 km is the assumed
    /// canonical value.
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

impl Default for EmergenciesConfig {
    fn default() -> Self {
        Self {
            radius_km: default_radius_km(),
        }
    }
}

fn default_radius_km() -> f64 {
    2.0
}
