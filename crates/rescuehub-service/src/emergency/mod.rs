//! Emergency query, creation, and resolution.

pub mod proximity;
pub mod service;

pub use service::EmergencyService;
