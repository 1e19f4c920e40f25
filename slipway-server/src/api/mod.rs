//! API Module
//!
//! HTTP layer for the deploy service.
//! Each submodule handles one endpoint group.

pub mod deploy;
pub mod error;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use slipway_engine::Deployer;

/// Create the API router with all endpoints
pub fn create_router(deployer: Arc<Deployer>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Deploy trigger
        .route("/deploy", post(deploy::trigger_deploy))
        // Add state and middleware
        .with_state(deployer)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
