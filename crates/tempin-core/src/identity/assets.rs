//! Scaled logo asset lookup inside a package install location.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::errors::TempinError;
use crate::identity::errors::IdentityError;
use crate::ports::FileSystem;

/// Scale variants in lookup order. `None` is the unscaled base asset.
pub const SCALE_PRIORITY: [Option<u32>; 3] = [Some(400), Some(200), None];

/// Insert a `.scale-N` token before the asset's extension.
///
/// Only the file name is touched; either separator may appear in the
/// directory part of the relative asset name.
pub fn scale_variant(logo_asset: &str, scale: u32) -> String {
    let name_start = logo_asset.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let (dir, name) = logo_asset.split_at(name_start);

    match name.rfind('.') {
        Some(dot) if dot > 0 => {
            let (stem, ext) = name.split_at(dot);
            format!("{dir}{stem}.scale-{scale}{ext}")
        }
        _ => format!("{dir}{name}.scale-{scale}"),
    }
}

/// Candidate paths in strict priority order.
pub fn candidate_paths(install_location: &Path, logo_asset: &str) -> Vec<PathBuf> {
    SCALE_PRIORITY
        .iter()
        .map(|scale| match scale {
            Some(scale) => install_location.join(scale_variant(logo_asset, *scale)),
            None => install_location.join(logo_asset),
        })
        .collect()
}

/// Return the highest-priority logo variant that exists on disk.
pub async fn locate_icon_asset<F: FileSystem>(
    fs: &F,
    install_location: &Path,
    logo_asset: &str,
) -> Option<PathBuf> {
    if logo_asset.trim().is_empty() || install_location.as_os_str().is_empty() {
        log_not_found(install_location, logo_asset);
        return None;
    }

    for candidate in candidate_paths(install_location, logo_asset) {
        if fs.exists(&candidate).await {
            debug!(
                event = "core.identity.asset_located",
                path = %candidate.display()
            );
            return Some(candidate);
        }
    }

    log_not_found(install_location, logo_asset);
    None
}

fn log_not_found(install_location: &Path, logo_asset: &str) {
    let e = IdentityError::AssetNotFound {
        install_location: install_location.display().to_string(),
        logo: logo_asset.to_string(),
    };
    warn!(
        event = "core.identity.asset_not_found",
        error = %e,
        error_code = e.error_code()
    );
}
