//! Deploy pipeline orchestration
//!
//! Drives one trigger through fetch → validate → build → reconcile → launch.
//! Stages run strictly forward with no retries; the first failure aborts the
//! run, and the workspace is released on every exit path. The reconcile and
//! launch stages run under the project's launch lock so concurrent triggers
//! for the same repository serialize instead of double-launching.

use std::sync::Arc;
use tracing::info;
use url::Url;
use uuid::Uuid;

use slipway_core::domain::deployment::Deployment;
use slipway_core::domain::image::ImageRef;
use slipway_core::domain::instance::RunningInstance;

use crate::error::Result;
use crate::locks::LaunchLocks;
use crate::ports::{DEFAULT_BASE_PORT, PortAllocator};
use crate::tools::{ContainerRuntime, ImageBuilder, VersionControl};
use crate::workspace::Workspace;

/// Engine configuration, injected at construction
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Lowest host port the allocator hands out
    pub base_port: u16,
    /// Highest host port the allocator considers
    pub port_ceiling: u16,
    /// Build descriptor that must exist at the workspace root
    pub build_descriptor: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            base_port: DEFAULT_BASE_PORT,
            port_ceiling: u16::MAX,
            build_descriptor: "Dockerfile".to_string(),
        }
    }
}

/// End-to-end deploy orchestrator
///
/// Owns stage ordering and error propagation. All collaborators are injected;
/// nothing here reads ambient process state.
pub struct Deployer {
    config: DeployConfig,
    vcs: Arc<dyn VersionControl>,
    builder: Arc<dyn ImageBuilder>,
    runtime: Arc<dyn ContainerRuntime>,
    ports: PortAllocator,
    locks: LaunchLocks,
}

impl Deployer {
    pub fn new(
        config: DeployConfig,
        vcs: Arc<dyn VersionControl>,
        builder: Arc<dyn ImageBuilder>,
        runtime: Arc<dyn ContainerRuntime>,
    ) -> Self {
        let ports = PortAllocator::new(config.base_port, config.port_ceiling);
        Self {
            config,
            vcs,
            builder,
            runtime,
            ports,
            locks: LaunchLocks::new(),
        }
    }

    /// Runs the full pipeline for `repo_url`, replacing any prior deployment
    /// of the same repository.
    pub fn deploy(&self, repo_url: &Url) -> Result<Deployment> {
        let deploy_id = Uuid::new_v4();
        let span = tracing::info_span!("deploy", %deploy_id, repo = %repo_url);
        let _enter = span.enter();

        // Fetching
        let workspace = Workspace::checkout(self.vcs.as_ref(), repo_url)?;

        // Validating
        workspace.ensure_deployable(&self.config.build_descriptor)?;

        // Building
        let image = ImageRef::from_source(repo_url, workspace.revision());
        info!("building image {}", image);
        self.builder.build(&image, workspace.path())?;

        // Reconciling and Launching, serialized per project
        let lock = self.locks.for_image(&image.name);
        let _guard = lock.lock().unwrap();

        let port = match self.find_previous(&image)? {
            Some(previous) => {
                // Reuse the old instance's port so downstream references
                // (DNS, proxies) keep working across redeploys.
                info!(
                    "replacing instance {} bound to port {}",
                    previous.id, previous.port
                );
                self.runtime.remove(&previous.id)?;
                previous.port
            }
            None => {
                let port = self.ports.allocate()?;
                info!("no running instance, allocated port {}", port);
                port
            }
        };

        let container_id = self.runtime.run(&image, port)?;
        info!("launched container {} on port {}", container_id, port);

        Ok(Deployment::new(image, port))
    }

    /// Probes the runtime for an instance of any prior revision of `image`
    fn find_previous(&self, image: &ImageRef) -> Result<Option<RunningInstance>> {
        let Some(id) = self.runtime.find_running(&image.name)? else {
            return Ok(None);
        };
        let port = self.runtime.bound_port(&id)?;
        Ok(Some(RunningInstance { id, port }))
    }
}
