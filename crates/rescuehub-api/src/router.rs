//! Route definitions for the RescueHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Extra body headroom beyond the configured certificate size cap, so
/// oversize uploads reach the service validation instead of being cut
/// off with a bare 413 at the framework boundary.
const BODY_LIMIT_SLACK_BYTES: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.upload.max_size_bytes as usize + BODY_LIMIT_SLACK_BYTES;

    let api_routes = Router::new()
        .merge(emergency_routes())
        .merge(application_routes())
        .merge(volunteer_routes())
        .merge(auth_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Emergency listing, reporting, and resolution
fn emergency_routes() -> Router<AppState> {
    Router::new()
        .route("/emergencies", get(handlers::emergency::list_emergencies))
        .route("/emergencies", post(handlers::emergency::create_emergency))
        .route("/emergencies/{id}", get(handlers::emergency::get_emergency))
        .route(
            "/emergencies/{id}",
            delete(handlers::emergency::resolve_emergency),
        )
}

/// Volunteer applications to emergencies
fn application_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/emergencies/{id}/applications",
            post(handlers::application::apply),
        )
        .route(
            "/emergencies/{id}/applications",
            get(handlers::application::list_applicants),
        )
}

/// Volunteer accounts and certification lifecycle
fn volunteer_routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers", post(handlers::account::signup))
        .route("/volunteers/{id}", get(handlers::account::get_volunteer))
        .route(
            "/volunteers/{id}/certification",
            post(handlers::certification::submit_certification),
        )
        .route(
            "/volunteers/{id}/certification",
            get(handlers::certification::download_certification),
        )
        .route(
            "/volunteers/{id}/verify",
            post(handlers::certification::approve_certification),
        )
}

/// Credential check endpoint
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/check", get(handlers::account::check_credentials))
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors = cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds));

    cors
}
