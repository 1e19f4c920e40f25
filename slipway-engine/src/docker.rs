//! Docker CLI adapter
//!
//! Implements image building and container lifecycle against the `docker`
//! binary. Any OCI-compatible engine exposing the same subcommands works.

use std::path::Path;
use std::process::Command;
use tracing::debug;

use slipway_core::domain::image::ImageRef;

use crate::error::{DeployError, Result};
use crate::process::capture;
use crate::tools::{ContainerRuntime, ImageBuilder};

/// `docker`-backed implementation of [`ImageBuilder`] and [`ContainerRuntime`]
#[derive(Debug, Default, Clone)]
pub struct DockerCli;

impl ImageBuilder for DockerCli {
    fn build(&self, image: &ImageRef, workdir: &Path) -> Result<()> {
        capture(
            "docker build",
            Command::new("docker")
                .args(["build", "-t"])
                .arg(image.reference())
                .arg(workdir),
        )?;
        Ok(())
    }
}

impl ContainerRuntime for DockerCli {
    fn find_running(&self, image_name: &str) -> Result<Option<String>> {
        let out = capture(
            "docker ps",
            Command::new("docker")
                .args(["ps", "-q", "--filter"])
                .arg(format!("ancestor={image_name}")),
        )?;

        // `docker ps` lists newest first; the first id is canonical when
        // several instances share the image name.
        let id = out
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string);

        if let Some(ref id) = id {
            debug!("found running instance {} for image {}", id, image_name);
        }
        Ok(id)
    }

    fn bound_port(&self, container_id: &str) -> Result<u16> {
        let out = capture("docker port", Command::new("docker").arg("port").arg(container_id))?;

        parse_host_port(&out).ok_or_else(|| {
            DeployError::tool(
                "docker port",
                format!("unparsable port mapping: '{}'", out.trim()),
            )
        })
    }

    fn remove(&self, container_id: &str) -> Result<()> {
        capture(
            "docker rm",
            Command::new("docker").args(["rm", "-f"]).arg(container_id),
        )?;
        Ok(())
    }

    fn run(&self, image: &ImageRef, host_port: u16) -> Result<String> {
        let out = capture(
            "docker run",
            Command::new("docker")
                .args(["run", "-d", "-p"])
                .arg(format!("{host_port}:80"))
                .arg(image.reference()),
        )?;
        Ok(out.trim().to_string())
    }
}

/// Parses the host port out of a `docker port` mapping line such as
/// `80/tcp -> 0.0.0.0:3000`
fn parse_host_port(output: &str) -> Option<u16> {
    let line = output.lines().next()?;
    line.rsplit(':').next()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_port_ipv4() {
        assert_eq!(parse_host_port("80/tcp -> 0.0.0.0:3000\n"), Some(3000));
    }

    #[test]
    fn test_parse_host_port_ipv6() {
        assert_eq!(parse_host_port("80/tcp -> :::3107\n"), Some(3107));
    }

    #[test]
    fn test_parse_host_port_first_mapping_wins() {
        let out = "80/tcp -> 0.0.0.0:3000\n80/tcp -> :::3000\n";
        assert_eq!(parse_host_port(out), Some(3000));
    }

    #[test]
    fn test_parse_host_port_rejects_garbage() {
        assert_eq!(parse_host_port(""), None);
        assert_eq!(parse_host_port("no mapping here"), None);
    }
}
