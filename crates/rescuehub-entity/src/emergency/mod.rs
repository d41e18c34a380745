//! Emergency entity.

pub mod model;

pub use model::{CreateEmergency, Emergency, MAX_LEVEL, MIN_LEVEL};
