//! Deploy API Handler
//!
//! The single trigger endpoint. Validates the request URL, then moves the
//! synchronous pipeline onto the blocking pool so external processes never
//! stall the async executor.

use axum::{Json, extract::State};
use std::sync::Arc;
use url::Url;

use slipway_core::dto::deploy::{DeployRequest, DeployResponse};
use slipway_engine::Deployer;

use crate::api::error::{ApiError, ApiResult};

/// POST /deploy
/// Clone, build, and (re)launch the repository named in the request
pub async fn trigger_deploy(
    State(deployer): State<Arc<Deployer>>,
    Json(req): Json<DeployRequest>,
) -> ApiResult<Json<DeployResponse>> {
    tracing::info!("Deploy requested for {}", req.url);

    let repo_url = parse_repo_url(&req.url).map_err(ApiError::BadRequest)?;

    let deployment = tokio::task::spawn_blocking(move || deployer.deploy(&repo_url))
        .await
        .map_err(|e| ApiError::InternalError(format!("deploy task failed: {e}")))??;

    Ok(Json(DeployResponse::from(deployment)))
}

/// Validates the request URL before anything touches an external tool
fn parse_repo_url(raw: &str) -> Result<Url, String> {
    Url::parse(raw).map_err(|e| format!("invalid repository url: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_is_accepted() {
        assert!(parse_repo_url("https://github.com/acme/app.git").is_ok());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = parse_repo_url("not a url").unwrap_err();
        assert!(err.contains("invalid repository url"));
    }

    #[test]
    fn test_relative_path_is_rejected() {
        assert!(parse_repo_url("acme/app").is_err());
    }
}
