//! Ephemeral repository checkouts
//!
//! A [`Workspace`] owns the scratch directory holding one pipeline run's
//! working tree. The directory is created fresh for every run and removed
//! when the workspace is dropped, so success and failure paths release it
//! alike and nothing leaks across requests.

use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, info};
use url::Url;

use crate::error::{DeployError, Result};
use crate::tools::VersionControl;

/// One pipeline run's checkout
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    revision: String,
}

impl Workspace {
    /// Clones `url` into a fresh scratch directory and resolves the
    /// checked-out revision.
    ///
    /// On any failure the partially-populated directory is removed before
    /// this returns.
    pub fn checkout(vcs: &dyn VersionControl, url: &Url) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("repo-")
            .tempdir()
            .map_err(|e| DeployError::Environment(format!("failed to create scratch dir: {e}")))?;

        info!("cloning {} into {}", url, dir.path().display());
        vcs.clone_repo(url, dir.path())?;

        let revision = vcs.short_revision(dir.path())?;
        debug!("checked out revision {}", revision);

        Ok(Self { dir, revision })
    }

    /// Root of the working tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Short revision identifier of the checkout
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Confirms the checkout carries the build descriptor the build stage
    /// needs. Checked before any build tool is invoked.
    pub fn ensure_deployable(&self, descriptor: &str) -> Result<()> {
        let path = self.dir.path().join(descriptor);
        if !path.is_file() {
            return Err(DeployError::NotDeployable(format!(
                "{descriptor} not found in repository root"
            )));
        }

        debug!("{} found at {}", descriptor, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Fake version control that populates the destination itself
    struct StubVcs {
        files: Vec<&'static str>,
        fail_clone: bool,
        seen_dest: Mutex<Option<PathBuf>>,
    }

    impl StubVcs {
        fn with_files(files: Vec<&'static str>) -> Self {
            Self {
                files,
                fail_clone: false,
                seen_dest: Mutex::new(None),
            }
        }
    }

    impl VersionControl for StubVcs {
        fn clone_repo(&self, _url: &Url, dest: &Path) -> Result<()> {
            *self.seen_dest.lock().unwrap() = Some(dest.to_path_buf());
            if self.fail_clone {
                return Err(DeployError::tool("git clone", "fatal: repository not found"));
            }
            for file in &self.files {
                std::fs::write(dest.join(file), "content").unwrap();
            }
            Ok(())
        }

        fn short_revision(&self, _workdir: &Path) -> Result<String> {
            Ok("abc1234".to_string())
        }
    }

    fn repo_url() -> Url {
        Url::parse("https://github.com/acme/app.git").unwrap()
    }

    #[test]
    fn test_checkout_resolves_revision() {
        let vcs = StubVcs::with_files(vec!["Dockerfile"]);
        let workspace = Workspace::checkout(&vcs, &repo_url()).unwrap();

        assert_eq!(workspace.revision(), "abc1234");
        assert!(workspace.path().join("Dockerfile").is_file());
    }

    #[test]
    fn test_failed_clone_leaves_no_directory() {
        let vcs = StubVcs {
            fail_clone: true,
            ..StubVcs::with_files(vec![])
        };

        let err = Workspace::checkout(&vcs, &repo_url()).unwrap_err();
        assert!(matches!(err, DeployError::Tool { .. }));

        let dest = self_dest(&vcs);
        assert!(!dest.exists(), "scratch dir must be removed on failure");
    }

    #[test]
    fn test_drop_removes_directory() {
        let vcs = StubVcs::with_files(vec!["Dockerfile"]);
        let workspace = Workspace::checkout(&vcs, &repo_url()).unwrap();
        let path = workspace.path().to_path_buf();

        assert!(path.exists());
        drop(workspace);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_descriptor_is_not_deployable() {
        let vcs = StubVcs::with_files(vec!["README.md"]);
        let workspace = Workspace::checkout(&vcs, &repo_url()).unwrap();

        let err = workspace.ensure_deployable("Dockerfile").unwrap_err();
        assert!(err.is_not_deployable());
    }

    #[test]
    fn test_present_descriptor_is_deployable() {
        let vcs = StubVcs::with_files(vec!["Dockerfile"]);
        let workspace = Workspace::checkout(&vcs, &repo_url()).unwrap();

        assert!(workspace.ensure_deployable("Dockerfile").is_ok());
    }

    fn self_dest(vcs: &StubVcs) -> PathBuf {
        vcs.seen_dest.lock().unwrap().clone().unwrap()
    }
}
