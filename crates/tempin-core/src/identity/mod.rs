//! Running-application identity pipeline.
//!
//! A [`RawAppRecord`] flows through four steps, each of which can only
//! degrade forward:
//!
//! - [`package`] - packaged-application identity (optional enrichment)
//! - [`assets`] - highest-density logo variant inside the package
//! - [`icons`] - copy, default substitution and inline encoding
//! - [`handler`] - orchestration, title derivation, final descriptor
//!
//! # Usage
//!
//! ```rust,no_run
//! use tempin_core::config::TempinConfig;
//! use tempin_core::identity::{RawAppRecord, WindowHandle, resolve_identity};
//! use tempin_core::ports::SystemPorts;
//!
//! # async fn example() {
//! let ports = SystemPorts::from_config(&TempinConfig::default());
//! let raw = RawAppRecord {
//!     exe: "C:\\Windows\\notepad.exe".into(),
//!     execution_path: "C:\\Windows\\notepad.exe".to_string(),
//!     window_handle: WindowHandle(132_100),
//!     icon_path: "C:\\Users\\me\\AppData\\Roaming\\icons\\notepad.png".into(),
//!     icon: None,
//! };
//! let pin = resolve_identity(&ports, raw).await;
//! assert_eq!(pin.title, "notepad.exe");
//! # }
//! ```

pub mod assets;
pub mod errors;
pub mod handler;
pub mod icons;
pub mod package;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use errors::IdentityError;
pub use handler::{derive_title, resolve_identities, resolve_identity};
pub use types::{
    IconData, MaterializedIcon, PackageIdentity, PinKind, RawAppRecord, ResolvedIdentity,
    WindowHandle,
};
