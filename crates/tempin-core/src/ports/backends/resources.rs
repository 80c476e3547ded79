use std::path::{Path, PathBuf};

use crate::config::ResourcesConfig;
use crate::identity::errors::IdentityError;
use crate::ports::ResourcePaths;

#[cfg(windows)]
const DEFAULT_URI_PREFIX: &str = "http://asset.localhost/";
#[cfg(not(windows))]
const DEFAULT_URI_PREFIX: &str = "asset://localhost/";

/// [`ResourcePaths`] driven by configuration.
///
/// Without a configured directory, resources are looked up next to the
/// running executable.
#[derive(Debug, Clone)]
pub struct StaticResourcePaths {
    dir: Option<PathBuf>,
    default_icon: PathBuf,
    uri_prefix: String,
}

impl StaticResourcePaths {
    pub fn from_config(config: &ResourcesConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            default_icon: config.default_icon.clone(),
            uri_prefix: config
                .uri_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_URI_PREFIX.to_string()),
        }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::from_config(&ResourcesConfig::default())
        }
    }
}

impl ResourcePaths for StaticResourcePaths {
    async fn resource_dir(&self) -> Result<PathBuf, IdentityError> {
        if let Some(dir) = &self.dir {
            return Ok(dir.clone());
        }

        let exe = std::env::current_exe().map_err(|e| IdentityError::ResourceDirUnavailable {
            message: e.to_string(),
        })?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| IdentityError::ResourceDirUnavailable {
                message: format!("'{}' has no parent directory", exe.display()),
            })
    }

    fn default_icon(&self) -> &Path {
        &self.default_icon
    }

    fn resource_uri(&self, path: &Path) -> String {
        format!(
            "{}{}",
            self.uri_prefix,
            encode_uri_component(&path.to_string_lossy())
        )
    }
}

/// Percent-encode everything except RFC 3986 unreserved characters and the
/// marks `encodeURIComponent` leaves alone.
fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
