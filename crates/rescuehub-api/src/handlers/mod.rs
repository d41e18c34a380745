//! HTTP request handlers.

pub mod account;
pub mod application;
pub mod certification;
pub mod emergency;
pub mod health;
