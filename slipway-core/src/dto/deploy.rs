//! Deploy trigger DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::deployment::Deployment;

/// Inbound trigger payload
///
/// The URL is carried as a string and validated at the API boundary; nothing
/// malformed reaches the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployRequest {
    pub url: String,
}

/// Outcome reported to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployResponse {
    /// Full reference of the launched image
    pub image: String,
    /// Host port the new instance is bound to
    pub port: u16,
    pub deployed_at: DateTime<Utc>,
}

impl From<Deployment> for DeployResponse {
    fn from(deployment: Deployment) -> Self {
        Self {
            image: deployment.image.reference(),
            port: deployment.port,
            deployed_at: deployment.deployed_at,
        }
    }
}
