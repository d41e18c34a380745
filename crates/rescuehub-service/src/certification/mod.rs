//! Certification artifact upload and admin approval.

pub mod service;

pub use service::CertificationService;
