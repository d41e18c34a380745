//! Volunteer account management and credential checks.

pub mod password;
pub mod service;

pub use password::PasswordHasher;
pub use service::AccountService;
