//! External tool abstractions
//!
//! The pipeline drives version control, image building, and the container
//! runtime through these traits so the orchestrator can be exercised against
//! in-memory fakes. CLI-backed implementations live in [`crate::git`] and
//! [`crate::docker`]; any tool exposing the same operations is substitutable.

use std::path::Path;
use url::Url;

use slipway_core::domain::image::ImageRef;

use crate::error::Result;

/// Version control operations needed by the fetch stage
pub trait VersionControl: Send + Sync {
    /// Materializes a working tree of `url` into `dest`, an existing empty
    /// directory
    fn clone_repo(&self, url: &Url, dest: &Path) -> Result<()>;

    /// Returns the short revision identifier of the checkout at `workdir`
    fn short_revision(&self, workdir: &Path) -> Result<String>;
}

/// Builds container images from a prepared build context
pub trait ImageBuilder: Send + Sync {
    /// Builds the context at `workdir` and tags the result as `image`;
    /// does not start anything
    fn build(&self, image: &ImageRef, workdir: &Path) -> Result<()>;
}

/// Container runtime operations needed by the reconcile and launch stages
pub trait ContainerRuntime: Send + Sync {
    /// Returns the id of a running container started from an image sharing
    /// `image_name`, regardless of tag. When several match, the most
    /// recently started one wins.
    fn find_running(&self, image_name: &str) -> Result<Option<String>>;

    /// Returns the host port bound to `container_id`
    fn bound_port(&self, container_id: &str) -> Result<u16>;

    /// Force-removes `container_id`
    fn remove(&self, container_id: &str) -> Result<()>;

    /// Starts a detached container from `image` publishing `host_port` to
    /// container port 80; returns the new container id
    fn run(&self, image: &ImageRef, host_port: u16) -> Result<String>;
}
