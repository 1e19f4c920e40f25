//! Image identity derivation

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Name and tag of a built container image
///
/// The identity is a pure function of the repository location and the source
/// revision, so deploying an unchanged revision produces the same reference
/// and a prior instance of it can be recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Name component, shared by every revision of one repository
    pub name: String,
    /// Tag component, the short revision identifier of the checkout
    pub tag: String,
}

impl ImageRef {
    /// Derives the image identity for `repo` at `revision`.
    ///
    /// The name is the repository host plus path, lowercased with any
    /// trailing `/` or `.git` stripped so `…/app` and `…/app.git` land on one
    /// name and the result is a valid OCI image name.
    pub fn from_source(repo: &Url, revision: &str) -> Self {
        let host = repo.host_str().unwrap_or_default();
        let path = repo.path().trim_end_matches('/');
        let path = path.strip_suffix(".git").unwrap_or(path);

        Self {
            name: format!("{host}{path}").to_ascii_lowercase(),
            tag: revision.trim().to_string(),
        }
    }

    /// Full `name:tag` reference as passed to the build and run tools
    pub fn reference(&self) -> String {
        format!("{}:{}", self.name, self.tag)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}
