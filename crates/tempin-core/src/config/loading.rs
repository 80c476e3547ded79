//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tempin/config.toml` (global user preferences)
//! 3. **Project config** - `./.tempin/config.toml` (working-directory overrides)

use crate::config::types::{ConfigLayer, PackagesConfig, ResourcesConfig, TempinConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_DIR: &str = ".tempin";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a present file fails to parse or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<TempinConfig, ConfigError> {
    let user_path = user_config_path();
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);

    load_hierarchy_from(user_path.as_deref(), &project_path)
}

/// Load and merge the given user and project config files.
pub fn load_hierarchy_from(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<TempinConfig, ConfigError> {
    let mut config = TempinConfig::default();

    if let Some(path) = user_path
        && let Some(user_layer) = load_config_file(path)?
    {
        config = merge_configs(config, user_layer);
    }

    if let Some(project_layer) = load_config_file(project_path)? {
        config = merge_configs(config, project_layer);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a single config file. Returns `Ok(None)` when the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigLayer>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let layer: ConfigLayer =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(
        event = "core.config.file_loaded",
        path = %path.display()
    );

    Ok(Some(layer))
}

/// Apply a config file layer onto `base`.
///
/// Keys the layer names replace the base value. Everything else is kept.
pub fn merge_configs(base: TempinConfig, layer: ConfigLayer) -> TempinConfig {
    let ConfigLayer {
        resources,
        packages,
    } = layer;

    TempinConfig {
        resources: ResourcesConfig {
            dir: resources.dir.or(base.resources.dir),
            default_icon: resources
                .default_icon
                .unwrap_or(base.resources.default_icon),
            uri_prefix: resources.uri_prefix.or(base.resources.uri_prefix),
        },
        packages: PackagesConfig {
            enabled: packages.enabled.unwrap_or(base.packages.enabled),
            timeout_ms: packages.timeout_ms.unwrap_or(base.packages.timeout_ms),
            powershell: packages.powershell.unwrap_or(base.packages.powershell),
        },
    }
}

/// Location of the user-level config file, if a home directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}
