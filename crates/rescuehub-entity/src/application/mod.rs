//! Application (claim) entity.

pub mod model;

pub use model::{Applicant, Application};
