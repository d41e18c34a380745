//! # rescuehub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all RescueHub entities. The transactional
//! invariants of the apply and resolve workflows live here, expressed as
//! single database transactions.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
