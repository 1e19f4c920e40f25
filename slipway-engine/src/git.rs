//! Git CLI adapter

use std::path::Path;
use std::process::Command;
use url::Url;

use crate::error::Result;
use crate::process::capture;
use crate::tools::VersionControl;

/// `git`-backed implementation of [`VersionControl`]
#[derive(Debug, Default, Clone)]
pub struct GitCli;

impl VersionControl for GitCli {
    fn clone_repo(&self, url: &Url, dest: &Path) -> Result<()> {
        capture(
            "git clone",
            Command::new("git").arg("clone").arg(url.as_str()).arg(dest),
        )?;
        Ok(())
    }

    fn short_revision(&self, workdir: &Path) -> Result<String> {
        let out = capture(
            "git rev-parse",
            Command::new("git")
                .arg("-C")
                .arg(workdir)
                .args(["rev-parse", "--short", "HEAD"]),
        )?;
        Ok(out.trim().to_string())
    }
}
