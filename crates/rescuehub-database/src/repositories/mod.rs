//! Repository implementations.

pub mod application;
pub mod emergency;
pub mod volunteer;

use rescuehub_core::error::{AppError, ErrorKind};

/// Map an sqlx error into the application error taxonomy.
///
/// Connection-level failures become `ServiceUnavailable` so a client can
/// distinguish "store unreachable, retry" from "no data" and from real
/// query failures.
pub(crate) fn map_sqlx_err(context: &str, e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Io(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Tls(_) => AppError::with_source(
            ErrorKind::ServiceUnavailable,
            format!("{context}: data store unreachable"),
            e,
        ),
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
