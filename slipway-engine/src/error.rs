//! Error types for the deploy engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, DeployError>;

/// Errors that abort a pipeline run
///
/// Every variant is fatal to its run; there are no retries and no partial
/// results. The variants separate conditions the operator can act on
/// (environment, tool output) from ones the repository owner can act on
/// (deployability).
#[derive(Debug, Error)]
pub enum DeployError {
    /// Host environment failure: scratch space, filesystem
    #[error("environment failure: {0}")]
    Environment(String),

    /// An external tool exited non-zero or could not be executed; its
    /// combined output is preserved for diagnostics
    #[error("{tool} failed: {output}")]
    Tool {
        /// Which invocation failed (e.g. "git clone", "docker build")
        tool: String,
        /// Captured stdout/stderr of the failed invocation
        output: String,
    },

    /// The fetched repository carries no build descriptor; no build tool
    /// was attempted
    #[error("repository is not deployable: {0}")]
    NotDeployable(String),

    /// Every port in the allocator range is already bound
    #[error("no free port in range {start}-{end}")]
    PortsExhausted { start: u16, end: u16 },
}

impl DeployError {
    /// Create a tool error from an invocation label and its output
    pub fn tool(tool: impl Into<String>, output: impl Into<String>) -> Self {
        Self::Tool {
            tool: tool.into(),
            output: output.into(),
        }
    }

    /// Check if this error means the repository itself cannot be deployed
    pub fn is_not_deployable(&self) -> bool {
        matches!(self, Self::NotDeployable(_))
    }
}
