//! Certification artifact upload limits.

use serde::{Deserialize, Serialize};

/// Upload validation configuration for certification artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted artifact size in bytes.
    #[serde(default = "default_max_size_bytes")]
    pub max_size_bytes: u64,
    /// Accepted content types for the uploaded credential.
    #[serde(default = "default_allowed_content_types")]
    pub allowed_content_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size_bytes(),
            allowed_content_types: default_allowed_content_types(),
        }
    }
}

impl UploadConfig {
    /// Check whether a content type is in the allowed set.
    pub fn allows_content_type(&self, content_type: &str) -> bool {
        self.allowed_content_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(content_type))
    }
}

fn default_max_size_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_allowed_content_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "application/pdf".to_string(),
    ]
}
