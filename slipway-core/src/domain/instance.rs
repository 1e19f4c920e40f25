//! Observed container instances

use serde::{Deserialize, Serialize};

/// A running container discovered for an image name
///
/// External state observed through the container runtime. Discovered, never
/// created or stored by this service; it may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningInstance {
    /// Container identifier as reported by the runtime
    pub id: String,
    /// Host port the instance is bound to
    pub port: u16,
}
