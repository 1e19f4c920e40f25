//! Slipway deploy engine
//!
//! Turns a repository URL into a running containerized deployment, replacing
//! any prior deployment of the same project.
//!
//! Architecture:
//! - Tools: narrow traits over version control, image building, and the
//!   container runtime, with CLI-backed implementations
//! - Workspace: ephemeral per-run checkout, released on every exit path
//! - Ports: lowest-free host port allocation over a bounded range
//! - Locks: per-project serialization of the reconcile and launch stages
//! - Deploy: the orchestrator composing the stages in strict forward order
//!
//! The pipeline is synchronous end to end; callers on an async runtime move
//! it onto a blocking thread.

pub mod deploy;
pub mod docker;
pub mod error;
pub mod git;
pub mod locks;
pub mod ports;
mod process;
pub mod tools;
pub mod workspace;

pub use deploy::{DeployConfig, Deployer};
pub use error::{DeployError, Result};
