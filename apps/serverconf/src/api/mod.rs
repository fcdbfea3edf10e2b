//! # HTTP API Module
//!
//! REST API over one shared configuration session, served with axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /components[?type=]` - Catalog listing
//! - `GET /components/{id}` - Component details
//! - `GET /search?q=&type=` - Search by name or manufacturer
//! - `GET /compat/{id}` - Compatibility overview
//! - `GET /configuration` - Current configuration
//! - `POST /configuration/add` - Add a component (`{"id": ...}`)
//! - `POST /configuration/remove` - Remove a component (`{"id": ...}`)
//! - `POST /configuration/clear` - Start a new configuration
//! - `GET /configuration/available/{type}` - Components that can be added now
//! - `GET /export?format=json|csv` - Export the configuration
//!
//! ## Environment Variables
//!
//! - `SERVERCONF_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)

mod handlers;
mod types;

pub use handlers::{
    add_handler, available_handler, clear_handler, compat_handler, component_handler,
    components_handler, configuration_handler, export_handler, health_handler, remove_handler,
    search_handler,
};
pub use types::{
    CompatibilityResponse, ComponentsResponse, ErrorResponse, ExportQuery, HealthResponse,
    IdRequest, ListQuery, MAX_ID_LENGTH, MAX_QUERY_LENGTH, MutationResponse, SearchQuery,
};

use crate::i18n::Language;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use serverconf_core::{ConfiguratorError, Session};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KiB).
const MAX_BODY_SIZE: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    /// Language of rejection reasons and export documents.
    pub lang: Language,
}

impl AppState {
    #[must_use]
    pub fn new(session: Session, lang: Language) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            lang,
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from `SERVERCONF_CORS_ORIGINS`.
///
/// `*` allows every origin, a comma-separated list allows those origins, and
/// an unset or unusable value falls back to localhost only.
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("SERVERCONF_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (SERVERCONF_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed.is_empty() {
                tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
                build_localhost_cors()
            } else {
                restricted_cors(allowed)
            }
        }
        None => {
            tracing::info!("CORS: Defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn build_localhost_cors() -> CorsLayer {
    let origins = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|origin| origin.parse::<HeaderValue>().ok())
    .collect();

    restricted_cors(origins)
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/components", get(handlers::components_handler))
        .route("/components/{id}", get(handlers::component_handler))
        .route("/search", get(handlers::search_handler))
        .route("/compat/{id}", get(handlers::compat_handler))
        .route("/configuration", get(handlers::configuration_handler))
        .route("/configuration/add", post(handlers::add_handler))
        .route("/configuration/remove", post(handlers::remove_handler))
        .route("/configuration/clear", post(handlers::clear_handler))
        .route(
            "/configuration/available/{type}",
            get(handlers::available_handler),
        )
        .route("/export", get(handlers::export_handler))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Serve `session` on `addr` until the process is stopped.
pub async fn run_server(addr: &str, session: Session, lang: Language) -> Result<(), ConfiguratorError> {
    let router = create_router(AppState::new(session, lang));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ConfiguratorError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("serverconf HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ConfiguratorError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
