use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{health, verify_litter},
    libraries::geofence::Geofence,
    models::LocationRegistry,
    services::{inference::InferenceClient, verdict_relay::VerdictRelay},
};

/// Photos arrive base64-encoded inside the JSON body
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Shared, read-only state for every request
pub struct AppState {
    pub geofence: Geofence,
    pub relay: VerdictRelay,
}

impl AppState {
    pub fn new(registry: LocationRegistry, inference: Arc<dyn InferenceClient>) -> Self {
        Self {
            geofence: Geofence::new(registry),
            relay: VerdictRelay::new(inference),
        }
    }
}

/// Build the HTTP router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/verificar-lixo", post(verify_litter))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES)),
        )
        .with_state(state)
}
