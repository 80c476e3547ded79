//! Configuration validation.

use crate::config::types::TempinConfig;
use crate::errors::ConfigError;

/// Validate a merged configuration.
///
/// # Errors
///
/// - `packages.timeout_ms` is zero
/// - `packages.powershell` is blank while lookups are enabled
/// - `resources.default_icon` is empty or absolute
/// - `resources.uri_prefix` is set but empty
pub fn validate_config(config: &TempinConfig) -> Result<(), ConfigError> {
    if config.packages.timeout_ms == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "packages.timeout_ms must be greater than 0".to_string(),
        });
    }

    if config.packages.enabled && config.packages.powershell.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "packages.powershell cannot be empty while packages.enabled is true"
                .to_string(),
        });
    }

    let icon = &config.resources.default_icon;
    if icon.as_os_str().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "resources.default_icon cannot be empty".to_string(),
        });
    }
    if icon.is_absolute() || icon.has_root() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "resources.default_icon must be relative to the resource directory, got '{}'",
                icon.display()
            ),
        });
    }

    if let Some(prefix) = &config.resources.uri_prefix
        && prefix.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "resources.uri_prefix cannot be empty when set".to_string(),
        });
    }

    Ok(())
}
