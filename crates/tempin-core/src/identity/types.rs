use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Opaque OS window handle as reported by the window enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub isize);

/// A running application as enumerated from the OS, before any enrichment.
///
/// `icon_path` is the destination slot the final descriptor will reference.
/// For classic applications the enumerator has usually already extracted the
/// executable's icon there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAppRecord {
    pub exe: PathBuf,
    pub execution_path: String,
    #[serde(rename = "hwnd")]
    pub window_handle: WindowHandle,
    pub icon_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Manifest-declared identity of a packaged application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageIdentity {
    pub app_id: String,
    pub package_name: String,
    pub publisher_id: String,
    pub install_location: PathBuf,
    /// Logo asset, relative to `install_location`.
    pub logo_asset: String,
}

impl PackageIdentity {
    /// Identity-based launch reference for this package.
    pub fn shell_alias(&self) -> String {
        format!(
            "shell:AppsFolder\\{}_{}!{}",
            self.package_name, self.publisher_id, self.app_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PinKind {
    TemporalPin,
}

/// UI-ready descriptor for a temporarily pinned running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIdentity {
    #[serde(rename = "type")]
    pub kind: PinKind,
    /// Inline data URI, or a resource URI when inline encoding failed.
    pub icon: String,
    pub icon_path: PathBuf,
    pub exe: PathBuf,
    pub execution_path: String,
    pub title: String,
    pub opens: Vec<WindowHandle>,
}

/// How the materialized icon is carried in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconData {
    /// Bytes encoded into a `data:` URI.
    Inline(String),
    /// Resource-addressable URI pointing at the icon file.
    Reference(String),
}

impl IconData {
    pub fn is_inline(&self) -> bool {
        matches!(self, IconData::Inline(_))
    }

    pub fn into_string(self) -> String {
        match self {
            IconData::Inline(s) | IconData::Reference(s) => s,
        }
    }
}

/// Output of icon materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedIcon {
    pub icon: IconData,
    pub icon_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_alias_format() {
        let identity = PackageIdentity {
            app_id: "App".to_string(),
            package_name: "Microsoft.WindowsCalculator".to_string(),
            publisher_id: "8wekyb3d8bbwe".to_string(),
            install_location: PathBuf::from("C:\\Program Files\\WindowsApps\\Calc"),
            logo_asset: "Assets\\CalculatorStoreLogo.png".to_string(),
        };
        assert_eq!(
            identity.shell_alias(),
            "shell:AppsFolder\\Microsoft.WindowsCalculator_8wekyb3d8bbwe!App"
        );
    }

    #[test]
    fn test_raw_record_wire_format() {
        let json = r#"{
            "exe": "C:\\Windows\\notepad.exe",
            "execution_path": "C:\\Windows\\notepad.exe",
            "hwnd": 131890,
            "icon_path": "C:\\icons\\notepad.png"
        }"#;
        let record: RawAppRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.window_handle, WindowHandle(131890));
        assert!(record.icon.is_none());
    }

    #[test]
    fn test_resolved_identity_serializes_kind_as_type() {
        let resolved = ResolvedIdentity {
            kind: PinKind::TemporalPin,
            icon: "data:image/png;base64,AA==".to_string(),
            icon_path: PathBuf::from("/icons/app.png"),
            exe: PathBuf::from("/usr/bin/app"),
            execution_path: "/usr/bin/app".to_string(),
            title: "app".to_string(),
            opens: vec![WindowHandle(7)],
        };
        let value = serde_json::to_value(&resolved).unwrap();
        assert_eq!(value["type"], "TemporalPin");
        assert_eq!(value["opens"], serde_json::json!([7]));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_icon_data_into_string() {
        assert!(IconData::Inline("data:x".to_string()).is_inline());
        assert!(!IconData::Reference("asset://x".to_string()).is_inline());
        assert_eq!(
            IconData::Reference("asset://x".to_string()).into_string(),
            "asset://x"
        );
    }
}
