//! Icon materialization.
//!
//! Makes sure the descriptor's `icon_path` names a real file and that its
//! `icon` carries something renderable. Each step degrades forward:
//!
//! 1. copy the located source onto the target slot (failure: keep going)
//! 2. substitute the bundled default when the target is still absent
//! 3. inline the bytes as a `data:` URI, else reference the file by URI
//!
//! If even the bundled default is absent, an embedded placeholder image is
//! returned inline.

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::errors::TempinError;
use crate::identity::errors::IdentityError;
use crate::identity::types::{IconData, MaterializedIcon};
use crate::ports::{FileSystem, ImageEncoder, ResourcePaths};

/// 1x1 transparent PNG.
pub const PLACEHOLDER_ICON: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

pub async fn materialize_icon<F, R, E>(
    fs: &F,
    resources: &R,
    images: &E,
    source: Option<&Path>,
    target: &Path,
) -> MaterializedIcon
where
    F: FileSystem,
    R: ResourcePaths,
    E: ImageEncoder,
{
    if let Some(source) = source
        && source != target
    {
        copy_source(fs, source, target).await;
    }

    let icon_path = if fs.exists(target).await {
        target.to_path_buf()
    } else {
        let fallback = default_icon_path(resources).await;
        debug!(
            event = "core.identity.default_icon_substituted",
            target = %target.display(),
            fallback = %fallback.display()
        );
        fallback
    };

    let icon = load_icon(fs, resources, images, &icon_path).await;

    MaterializedIcon { icon, icon_path }
}

async fn copy_source<F: FileSystem>(fs: &F, source: &Path, target: &Path) {
    match fs.copy(source, target).await {
        Ok(()) => debug!(
            event = "core.identity.icon_copied",
            from = %source.display(),
            to = %target.display()
        ),
        Err(e) => {
            let e = IdentityError::IconCopyFailed {
                from: source.display().to_string(),
                to: target.display().to_string(),
                message: e.to_string(),
            };
            warn!(
                event = "core.identity.icon_copy_failed",
                error = %e,
                error_code = e.error_code()
            );
        }
    }
}

/// `<resource_dir>/<default_icon>`, or the bare relative default icon when
/// the resource directory itself cannot be resolved.
async fn default_icon_path<R: ResourcePaths>(resources: &R) -> PathBuf {
    match resources.resource_dir().await {
        Ok(dir) => dir.join(resources.default_icon()),
        Err(e) => {
            warn!(
                event = "core.identity.resource_dir_unavailable",
                error = %e,
                error_code = e.error_code()
            );
            resources.default_icon().to_path_buf()
        }
    }
}

async fn load_icon<F, R, E>(fs: &F, resources: &R, images: &E, icon_path: &Path) -> IconData
where
    F: FileSystem,
    R: ResourcePaths,
    E: ImageEncoder,
{
    let loaded = match fs.read(icon_path).await {
        Ok(bytes) => images.encode(&bytes),
        Err(e) => Err(IdentityError::IconLoadFailed {
            path: icon_path.display().to_string(),
            message: e.to_string(),
        }),
    };

    let e = match loaded {
        Ok(uri) => return IconData::Inline(uri),
        Err(e) => e,
    };

    if fs.exists(icon_path).await {
        warn!(
            event = "core.identity.icon_load_failed",
            path = %icon_path.display(),
            error = %e,
            error_code = e.error_code()
        );
        IconData::Reference(resources.resource_uri(icon_path))
    } else {
        error!(
            event = "core.identity.default_icon_missing",
            path = %icon_path.display(),
            error = %e
        );
        IconData::Inline(PLACEHOLDER_ICON.to_string())
    }
}
