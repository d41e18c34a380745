//! RescueHub Server — emergency response coordination backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use rescuehub_core::config::AppConfig;
use rescuehub_core::error::AppError;
use rescuehub_database::connection::DatabasePool;
use rescuehub_database::repositories::application::ApplicationRepository;
use rescuehub_database::repositories::emergency::EmergencyRepository;
use rescuehub_database::repositories::volunteer::VolunteerRepository;
use rescuehub_service::account::AccountService;
use rescuehub_service::account::password::PasswordHasher;
use rescuehub_service::application::ApplicationService;
use rescuehub_service::certification::CertificationService;
use rescuehub_service::emergency::EmergencyService;

#[tokio::main]
async fn main() {
    let env = std::env::var("RESCUEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RescueHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ────────────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    tracing::info!("Running database migrations...");
    rescuehub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    // ── Repositories ─────────────────────────────────────────────
    let emergency_repo = Arc::new(EmergencyRepository::new(db_pool.clone()));
    let volunteer_repo = Arc::new(VolunteerRepository::new(db_pool.clone()));
    let application_repo = Arc::new(ApplicationRepository::new(db_pool.clone()));

    // ── Services ─────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let emergency_service = Arc::new(EmergencyService::new(
        Arc::clone(&emergency_repo),
        config.emergencies.clone(),
    ));
    let application_service = Arc::new(ApplicationService::new(
        Arc::clone(&application_repo),
        Arc::clone(&emergency_repo),
    ));
    let account_service = Arc::new(AccountService::new(
        Arc::clone(&volunteer_repo),
        Arc::clone(&password_hasher),
    ));
    let certification_service = Arc::new(CertificationService::new(
        Arc::clone(&volunteer_repo),
        config.upload.clone(),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = rescuehub_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        emergency_repo,
        volunteer_repo,
        application_repo,
        emergency_service,
        application_service,
        account_service,
        certification_service,
    };

    let app = rescuehub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("RescueHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("RescueHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
