//! # Configuration System
//!
//! Hierarchical TOML configuration for tempin.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.tempin/config.toml`
//! 3. **Project config** - `./.tempin/config.toml`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.tempin/config.toml
//! [resources]
//! dir = "/opt/seelen/resources"
//!
//! [packages]
//! timeout_ms = 3000
//! ```
//!
//! ```rust,no_run
//! use tempin_core::config::TempinConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TempinConfig::load_hierarchy()?;
//!     println!("{}", config.packages.timeout_ms);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use defaults::DEFAULT_ICON_RELATIVE;
pub use types::{
    ConfigLayer, PackagesConfig, PackagesLayer, ResourcesConfig, ResourcesLayer, TempinConfig,
};
pub use validation::validate_config;

impl TempinConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
