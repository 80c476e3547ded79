use crate::errors::TempinError;

/// Failures inside the identity pipeline.
///
/// These are produced by ports and pipeline steps and logged where they
/// occur. None of them reaches the caller of `resolve_identity`.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Package lookup failed for '{exe}': {message}")]
    PackageLookupFailed { exe: String, message: String },

    #[error("Package metadata for '{exe}' is invalid: {message}")]
    InvalidPackageData { exe: String, message: String },

    #[error("No logo asset found for '{logo}' under '{install_location}'")]
    AssetNotFound {
        install_location: String,
        logo: String,
    },

    #[error("Failed to copy icon from '{from}' to '{to}': {message}")]
    IconCopyFailed {
        from: String,
        to: String,
        message: String,
    },

    #[error("Failed to load icon '{path}': {message}")]
    IconLoadFailed { path: String, message: String },

    #[error("Failed to encode image: {message}")]
    ImageEncodeFailed { message: String },

    #[error("Resource directory unavailable: {message}")]
    ResourceDirUnavailable { message: String },
}

impl TempinError for IdentityError {
    fn error_code(&self) -> &'static str {
        match self {
            IdentityError::PackageLookupFailed { .. } => "PACKAGE_LOOKUP_FAILED",
            IdentityError::InvalidPackageData { .. } => "INVALID_PACKAGE_DATA",
            IdentityError::AssetNotFound { .. } => "ASSET_NOT_FOUND",
            IdentityError::IconCopyFailed { .. } => "ICON_COPY_FAILED",
            IdentityError::IconLoadFailed { .. } => "ICON_LOAD_FAILED",
            IdentityError::ImageEncodeFailed { .. } => "IMAGE_ENCODE_FAILED",
            IdentityError::ResourceDirUnavailable { .. } => "RESOURCE_DIR_UNAVAILABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_lookup_failed_display() {
        let error = IdentityError::PackageLookupFailed {
            exe: "C:\\app.exe".to_string(),
            message: "access denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Package lookup failed for 'C:\\app.exe': access denied"
        );
        assert_eq!(error.error_code(), "PACKAGE_LOOKUP_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_asset_not_found_display() {
        let error = IdentityError::AssetNotFound {
            install_location: "/pkg".to_string(),
            logo: "Assets/Logo.png".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No logo asset found for 'Assets/Logo.png' under '/pkg'"
        );
        assert_eq!(error.error_code(), "ASSET_NOT_FOUND");
    }

    #[test]
    fn test_icon_copy_failed_display() {
        let error = IdentityError::IconCopyFailed {
            from: "/a.png".to_string(),
            to: "/b.png".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to copy icon from '/a.png' to '/b.png': disk full"
        );
        assert_eq!(error.error_code(), "ICON_COPY_FAILED");
    }
}
