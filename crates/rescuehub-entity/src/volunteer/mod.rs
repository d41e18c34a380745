//! Volunteer entity.

pub mod model;

pub use model::{Certificate, CreateVolunteer, Volunteer};
