//! Host port allocation
//!
//! Finds the lowest free TCP port in a bounded range via a bind-and-release
//! probe. Nothing holds the port between the probe and the container launch;
//! per-project locking keeps two runs of one project from colliding, and any
//! other collision surfaces when the runtime fails to bind at launch.

use std::net::TcpListener;
use tracing::debug;

use crate::error::{DeployError, Result};

/// Lowest host port handed out by default
pub const DEFAULT_BASE_PORT: u16 = 3000;

/// Ascending-scan allocator over an inclusive port range
///
/// The scan order is fixed, not randomized, so behavior is reproducible.
#[derive(Debug, Clone)]
pub struct PortAllocator {
    start: u16,
    end: u16,
}

impl PortAllocator {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Returns the lowest currently-bindable port in the range.
    ///
    /// Each candidate is verified by binding and immediately releasing a
    /// listener on the wildcard address.
    pub fn allocate(&self) -> Result<u16> {
        for port in self.start..=self.end {
            match TcpListener::bind(("0.0.0.0", port)) {
                Ok(listener) => {
                    drop(listener);
                    debug!("allocated free port {}", port);
                    return Ok(port);
                }
                Err(_) => continue,
            }
        }

        Err(DeployError::PortsExhausted {
            start: self.start,
            end: self.end,
        })
    }
}

impl Default for PortAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PORT, u16::MAX)
    }
}
