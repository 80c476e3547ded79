use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::identity::assets::locate_icon_asset;
use crate::identity::icons::materialize_icon;
use crate::identity::package::resolve_package_identity;
use crate::identity::types::{PinKind, RawAppRecord, ResolvedIdentity};
use crate::ports::{FileSystem, ImageEncoder, PackageQuery, Ports, ResourcePaths};

const UNKNOWN_TITLE: &str = "Unknown";

/// Turn a raw running-window record into a temporary pin descriptor.
///
/// Never fails. Package lookup, asset lookup, icon copy and icon encoding
/// each degrade to their "absent" outcome, so the worst case is a descriptor
/// pointing at the bundled default icon.
pub async fn resolve_identity<F, R, Q, E>(
    ports: &Ports<F, R, Q, E>,
    raw: RawAppRecord,
) -> ResolvedIdentity
where
    F: FileSystem,
    R: ResourcePaths,
    Q: PackageQuery,
    E: ImageEncoder,
{
    let start = Instant::now();
    info!(
        event = "core.identity.resolve_started",
        exe = %raw.exe.display(),
        hwnd = raw.window_handle.0
    );

    let RawAppRecord {
        exe,
        execution_path,
        window_handle,
        icon_path: target,
        icon: _,
    } = raw;

    let (execution_path, source) = match resolve_package_identity(&ports.packages, &exe).await {
        Some(identity) => {
            let located =
                locate_icon_asset(&ports.fs, &identity.install_location, &identity.logo_asset)
                    .await;
            (identity.shell_alias(), located)
        }
        None => (execution_path, Some(target.clone())),
    };

    let materialized = materialize_icon(
        &ports.fs,
        &ports.resources,
        &ports.images,
        source.as_deref(),
        &target,
    )
    .await;

    let inline = materialized.icon.is_inline();
    let resolved = ResolvedIdentity {
        kind: PinKind::TemporalPin,
        icon: materialized.icon.into_string(),
        icon_path: materialized.icon_path,
        title: derive_title(&exe),
        exe,
        execution_path,
        opens: vec![window_handle],
    };

    info!(
        event = "core.identity.resolve_completed",
        title = %resolved.title,
        icon_path = %resolved.icon_path.display(),
        inline_icon = inline,
        elapsed_ms = start.elapsed().as_millis() as u64
    );

    resolved
}

/// Resolve independent records concurrently, preserving input order.
pub async fn resolve_identities<F, R, Q, E>(
    ports: &Ports<F, R, Q, E>,
    records: Vec<RawAppRecord>,
) -> Vec<ResolvedIdentity>
where
    F: FileSystem,
    R: ResourcePaths,
    Q: PackageQuery,
    E: ImageEncoder,
{
    info!(
        event = "core.identity.batch_started",
        count = records.len()
    );

    let resolved = futures::future::join_all(
        records
            .into_iter()
            .map(|record| resolve_identity(ports, record)),
    )
    .await;

    info!(
        event = "core.identity.batch_completed",
        count = resolved.len()
    );

    resolved
}

/// Last path segment of `exe`, split on either separator.
pub fn derive_title(exe: &Path) -> String {
    let exe = exe.to_string_lossy();
    match exe.rsplit(['\\', '/']).next() {
        Some(segment) if !segment.is_empty() => segment.to_string(),
        _ => UNKNOWN_TITLE.to_string(),
    }
}
