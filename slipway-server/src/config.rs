//! Server configuration
//!
//! A single JSON file with one recognized option. A missing file is not an
//! error; the defaults apply. A present but malformed file is fatal at
//! startup.

use anyhow::Context;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

/// Port the HTTP listener binds when the config file says nothing
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// Parsed startup configuration, read-only after initialization
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Port the HTTP listener binds
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

impl Config {
    /// Loads configuration from `path`
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read config file {}", path.display()));
            }
        };

        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load("/nonexistent/config.json").unwrap();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_http_port_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"http_port": 8080}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http_port, 8080);
    }

    #[test]
    fn test_empty_object_keeps_default_port() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        assert!(Config::load(file.path()).is_err());
    }
}
