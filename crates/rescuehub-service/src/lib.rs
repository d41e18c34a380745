//! # rescuehub-service
//!
//! Business logic services for RescueHub. Services validate inputs,
//! delegate persistence to the repository layer, and log mutations.

pub mod account;
pub mod application;
pub mod certification;
pub mod emergency;
