//! # rescuehub-api
//!
//! HTTP API layer for RescueHub: axum router, request/response DTOs,
//! handlers, shared application state, and the `AppError` → HTTP mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
