//! Application (claim) workflow.

pub mod service;

pub use service::ApplicationService;
