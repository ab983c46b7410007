//! HTTP API Layer
//!
//! This crate exposes the damage-claims service over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for auth, claims, valuation and the dashboard
//! - **Middleware**: JWT authentication and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Domain errors mapped to consistent JSON responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::from_config(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    middleware as axum_middleware,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::SystemClock;
use domain_claims::{
    Authenticator, ClaimService, DamageClassifier, DemoAuthenticator, InMemoryClaimStore,
    RandomClassifier, ServiceConfig,
};

use crate::config::ApiConfig;
use crate::middleware::{auth_middleware, audit_middleware};
use crate::handlers::{auth as session, claims, dashboard, health, valuation};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: ClaimService,
    pub authenticator: Arc<dyn Authenticator>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(service: ClaimService, authenticator: Arc<dyn Authenticator>, config: ApiConfig) -> Self {
        Self {
            service,
            authenticator,
            config,
        }
    }

    /// Wires the in-memory store, the random classifier and the demo
    /// authenticator according to `config`
    pub fn from_config(config: ApiConfig) -> Self {
        let classifier: Arc<dyn DamageClassifier> = match config.classifier_seed {
            Some(seed) => Arc::new(RandomClassifier::seeded(seed)),
            None => Arc::new(RandomClassifier::new()),
        };

        let service = ClaimService::new(
            Arc::new(InMemoryClaimStore::new()),
            classifier,
            Arc::new(SystemClock),
            ServiceConfig::with_processing_delay(config.processing_delay()),
        );

        Self::new(service, Arc::new(DemoAuthenticator::new()), config)
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Claim service, authenticator and configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/v1/auth/login", post(session::login))
        .route("/api/v1/auth/register", post(session::register));

    // Claims routes; submissions carry the damage photo inline
    let claims_routes = Router::new()
        .route(
            "/",
            post(claims::submit_claim)
                .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
                .get(claims::list_claims),
        )
        .route("/active", get(claims::get_active_claim).put(claims::set_active_claim))
        .route("/:id", get(claims::get_claim))
        .route("/:id/status", put(claims::update_status));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .route("/valuations/quote", post(valuation::quote))
        .route("/dashboard", get(dashboard::dashboard))
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
