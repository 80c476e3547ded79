//! tempin-core: describe running applications as temporary pins
//!
//! Turns an OS-enumerated running-window record into a UI-ready descriptor
//! with a resolved icon, launch path and title. Used by the CLI and by any
//! host that shows transient pins for running applications.
//!
//! # Main Entry Points
//!
//! - [`identity`] - The resolution pipeline
//! - [`ports`] - Capabilities the pipeline needs, and their OS backends
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod identity;
pub mod logging;
pub mod ports;

// Re-export commonly used types at crate root for convenience
pub use config::TempinConfig;
pub use identity::{
    PackageIdentity, PinKind, RawAppRecord, ResolvedIdentity, WindowHandle, resolve_identities,
    resolve_identity,
};
pub use ports::{Ports, SystemPorts};

pub use logging::init_logging;
