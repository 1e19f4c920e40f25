//! Deploy outcomes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::image::ImageRef;

/// Result of a completed pipeline run
///
/// A projection of the orchestration outcome returned to the caller, not a
/// record kept anywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    /// Image the new instance was launched from
    pub image: ImageRef,
    /// Host port the new instance is bound to
    pub port: u16,
    pub deployed_at: DateTime<Utc>,
}

impl Deployment {
    /// Stamps a fresh deployment of `image` bound to `port`
    pub fn new(image: ImageRef, port: u16) -> Self {
        Self {
            image,
            port,
            deployed_at: Utc::now(),
        }
    }
}
