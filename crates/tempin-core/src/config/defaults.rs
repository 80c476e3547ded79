//! Default implementations for configuration types.
//!
//! Helper functions here back the `#[serde(default = "...")]` attributes.

use crate::config::types::{PackagesConfig, ResourcesConfig};
use std::path::PathBuf;

/// Bundled fallback icon, relative to the resource directory.
pub const DEFAULT_ICON_RELATIVE: &str = "static/icons/missing.png";

pub fn default_icon() -> PathBuf {
    PathBuf::from(DEFAULT_ICON_RELATIVE)
}

pub fn default_packages_enabled() -> bool {
    true
}

/// Returns the default package query timeout (5000ms).
///
/// Covers a cold PowerShell start plus manifest parsing.
pub fn default_package_timeout_ms() -> u64 {
    5000
}

pub fn default_powershell() -> String {
    "powershell".to_string()
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            default_icon: default_icon(),
            uri_prefix: None,
        }
    }
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_packages_enabled(),
            timeout_ms: default_package_timeout_ms(),
            powershell: default_powershell(),
        }
    }
}
