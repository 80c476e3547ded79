//! Configuration type definitions for tempin.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [resources]
//! dir = "C:\\Program Files\\Seelen\\resources"
//! default_icon = "static/icons/missing.png"
//!
//! [packages]
//! enabled = true
//! timeout_ms = 5000
//! powershell = "pwsh"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.tempin/config.toml`
/// 2. Project config: `./.tempin/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TempinConfig {
    /// Bundled resource location and the default icon inside it
    #[serde(default)]
    pub resources: ResourcesConfig,

    /// Packaged-application metadata lookup
    #[serde(default)]
    pub packages: PackagesConfig,
}

/// Where bundled assets live and how they are addressed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Runtime resource directory.
    /// Default: the directory containing the running executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Default icon, relative to the resource directory.
    /// Default: `static/icons/missing.png`.
    #[serde(default = "super::defaults::default_icon")]
    pub default_icon: PathBuf,

    /// Prefix for resource-addressable URIs.
    /// Default: `http://asset.localhost/` on Windows, `asset://localhost/` elsewhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri_prefix: Option<String>,
}

/// Packaged-application lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagesConfig {
    /// Whether to query package metadata at all.
    #[serde(default = "super::defaults::default_packages_enabled")]
    pub enabled: bool,

    /// Upper bound for a single metadata query in milliseconds.
    /// Default: 5000ms.
    #[serde(default = "super::defaults::default_package_timeout_ms")]
    pub timeout_ms: u64,

    /// PowerShell executable used for the query.
    #[serde(default = "super::defaults::default_powershell")]
    pub powershell: String,
}

/// One config file as written on disk.
///
/// Every field is optional so a file only overrides the keys it names.
/// Layers are applied onto a [`TempinConfig`] in hierarchy order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub resources: ResourcesLayer,

    #[serde(default)]
    pub packages: PackagesLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourcesLayer {
    pub dir: Option<PathBuf>,
    pub default_icon: Option<PathBuf>,
    pub uri_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackagesLayer {
    pub enabled: Option<bool>,
    pub timeout_ms: Option<u64>,
    pub powershell: Option<String>,
}
