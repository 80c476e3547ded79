//! Packaged-application identity lookup.
//!
//! "Not a packaged app" and "lookup failed" are deliberately indistinguishable
//! to callers: both come out as `None`.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::TempinError;
use crate::identity::errors::IdentityError;
use crate::identity::types::PackageIdentity;
use crate::ports::PackageQuery;

/// Resolve package metadata for `exe`, or `None` for classic applications.
///
/// Never fails: query errors and malformed metadata are logged here and
/// treated as "no enrichment".
pub async fn resolve_package_identity<Q: PackageQuery>(
    packages: &Q,
    exe: &Path,
) -> Option<PackageIdentity> {
    let outcome = match packages.query(exe).await {
        Ok(Some(identity)) => validate_identity(exe, identity).map(Some),
        other => other,
    };

    match outcome {
        Ok(Some(identity)) => {
            info!(
                event = "core.identity.package_resolved",
                exe = %exe.display(),
                package_name = %identity.package_name,
                app_id = %identity.app_id
            );
            Some(identity)
        }
        Ok(None) => {
            debug!(
                event = "core.identity.package_not_found",
                exe = %exe.display()
            );
            None
        }
        Err(e) => {
            warn!(
                event = "core.identity.package_lookup_failed",
                exe = %exe.display(),
                error = %e,
                error_code = e.error_code()
            );
            None
        }
    }
}

/// Reject metadata that cannot produce a launchable shell alias.
///
/// An empty install location or logo is tolerated; icon lookup simply finds
/// nothing for it.
fn validate_identity(exe: &Path, identity: PackageIdentity) -> Result<PackageIdentity, IdentityError> {
    let missing = [
        ("app_id", identity.app_id.trim().is_empty()),
        ("package_name", identity.package_name.trim().is_empty()),
        ("publisher_id", identity.publisher_id.trim().is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, empty)| empty.then_some(field))
    .collect::<Vec<_>>();

    if !missing.is_empty() {
        return Err(IdentityError::InvalidPackageData {
            exe: exe.display().to_string(),
            message: format!("missing {}", missing.join(", ")),
        });
    }

    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::test_support::{FakePackages, calculator_identity};

    #[tokio::test]
    async fn test_packaged_app_resolves() {
        let packages = FakePackages::found(calculator_identity("/pkg"));
        let identity = resolve_package_identity(&packages, Path::new("/pkg/Calc.exe")).await;
        assert_eq!(identity, Some(calculator_identity("/pkg")));
    }

    #[tokio::test]
    async fn test_classic_app_is_none() {
        let identity =
            resolve_package_identity(&FakePackages::not_packaged(), Path::new("/bin/app")).await;
        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn test_query_failure_collapses_to_none() {
        let identity =
            resolve_package_identity(&FakePackages::failing(), Path::new("/bin/app")).await;
        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn test_empty_app_id_is_rejected() {
        let mut identity = calculator_identity("/pkg");
        identity.app_id = String::new();
        let packages = FakePackages::found(identity);

        assert!(
            resolve_package_identity(&packages, Path::new("/pkg/Calc.exe"))
                .await
                .is_none()
        );
    }

    #[test]
    fn test_validate_lists_every_missing_field() {
        let mut identity = calculator_identity("/pkg");
        identity.package_name = " ".to_string();
        identity.publisher_id = String::new();

        let err = validate_identity(Path::new("/pkg/Calc.exe"), identity).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Package metadata for '/pkg/Calc.exe' is invalid: missing package_name, publisher_id"
        );
    }

    #[test]
    fn test_validate_tolerates_missing_logo() {
        let mut identity = calculator_identity("/pkg");
        identity.logo_asset = String::new();
        assert!(validate_identity(Path::new("/pkg/Calc.exe"), identity).is_ok());
    }
}
