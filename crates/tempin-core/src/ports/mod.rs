//! Capabilities the identity pipeline consumes from its host.
//!
//! The pipeline never touches the OS directly. Every filesystem check,
//! metadata query and encode goes through one of these traits, bundled in
//! [`Ports`] and injected by the caller. Production implementations live in
//! [`backends`]; tests substitute in-memory fakes.
//!
//! # Architecture
//!
//! - [`FileSystem`] - existence checks, byte copies and reads
//! - [`ResourcePaths`] - runtime resource directory and resource URIs
//! - [`PackageQuery`] - packaged-application metadata lookup
//! - [`ImageEncoder`] - inline `data:` URI encoding of loaded bytes

pub mod backends;

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_ICON_RELATIVE;
use crate::config::TempinConfig;
use crate::identity::errors::IdentityError;
use crate::identity::types::PackageIdentity;

use backends::{AppxPackageQuery, DataUriEncoder, StaticResourcePaths, TokioFileSystem};

/// Byte-level filesystem access on absolute paths.
pub trait FileSystem: Send + Sync {
    /// Whether `path` exists. Errors while checking count as absent.
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;

    /// Copy the bytes at `from` to `to`, overwriting `to` if present.
    fn copy(&self, from: &Path, to: &Path) -> impl Future<Output = io::Result<()>> + Send;

    fn read(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// Location of bundled assets shipped with the application.
pub trait ResourcePaths: Send + Sync {
    fn resource_dir(&self) -> impl Future<Output = Result<PathBuf, IdentityError>> + Send;

    /// Fallback icon, relative to [`ResourcePaths::resource_dir`].
    fn default_icon(&self) -> &Path {
        Path::new(DEFAULT_ICON_RELATIVE)
    }

    /// Resource-addressable URI for a local file.
    fn resource_uri(&self, path: &Path) -> String;
}

/// Packaged-application metadata lookup.
pub trait PackageQuery: Send + Sync {
    /// `Ok(None)` means the executable is not part of a package.
    fn query(
        &self,
        exe: &Path,
    ) -> impl Future<Output = Result<Option<PackageIdentity>, IdentityError>> + Send;
}

/// Converts image bytes into an inline transferable representation.
pub trait ImageEncoder: Send + Sync {
    /// Returns a `data:<mime>;base64,<payload>` URI.
    fn encode(&self, bytes: &[u8]) -> Result<String, IdentityError>;
}

/// The full set of ports one resolution needs.
#[derive(Debug, Clone)]
pub struct Ports<F, R, Q, E> {
    pub fs: F,
    pub resources: R,
    pub packages: Q,
    pub images: E,
}

/// Ports backed by the real OS.
pub type SystemPorts = Ports<TokioFileSystem, StaticResourcePaths, AppxPackageQuery, DataUriEncoder>;

impl SystemPorts {
    pub fn from_config(config: &TempinConfig) -> Self {
        Ports {
            fs: TokioFileSystem,
            resources: StaticResourcePaths::from_config(&config.resources),
            packages: AppxPackageQuery::from_config(&config.packages),
            images: DataUriEncoder,
        }
    }
}
