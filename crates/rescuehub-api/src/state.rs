//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use rescuehub_core::config::AppConfig;
use rescuehub_database::repositories::application::ApplicationRepository;
use rescuehub_database::repositories::emergency::EmergencyRepository;
use rescuehub_database::repositories::volunteer::VolunteerRepository;
use rescuehub_service::account::AccountService;
use rescuehub_service::application::ApplicationService;
use rescuehub_service::certification::CertificationService;
use rescuehub_service::emergency::EmergencyService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Repositories ─────────────────────────────────────────
    /// Emergency repository
    pub emergency_repo: Arc<EmergencyRepository>,
    /// Volunteer repository
    pub volunteer_repo: Arc<VolunteerRepository>,
    /// Application repository
    pub application_repo: Arc<ApplicationRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Emergency listing/reporting/resolution service
    pub emergency_service: Arc<EmergencyService>,
    /// Claim service
    pub application_service: Arc<ApplicationService>,
    /// Account and credential service
    pub account_service: Arc<AccountService>,
    /// Certification upload/approval service
    pub certification_service: Arc<CertificationService>,
}
