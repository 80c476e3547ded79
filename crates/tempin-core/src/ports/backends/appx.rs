use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::config::PackagesConfig;
use crate::identity::errors::IdentityError;
use crate::identity::types::PackageIdentity;
use crate::ports::PackageQuery;

/// [`PackageQuery`] backed by the Appx PowerShell module.
///
/// Only Windows has packaged applications; elsewhere every executable is
/// reported as unpackaged without spawning anything.
#[derive(Debug, Clone)]
pub struct AppxPackageQuery {
    enabled: bool,
    powershell: String,
    timeout: Duration,
}

impl AppxPackageQuery {
    pub fn from_config(config: &PackagesConfig) -> Self {
        Self {
            enabled: config.enabled,
            powershell: config.powershell.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    async fn run(&self, exe: &Path) -> Result<Option<PackageIdentity>, IdentityError> {
        let exe_display = exe.display().to_string();
        let lookup_failed = |message: String| IdentityError::PackageLookupFailed {
            exe: exe_display.clone(),
            message,
        };

        let script = build_lookup_script(exe);
        let mut command = tokio::process::Command::new(&self.powershell);
        command
            .args([
                "-NoProfile",
                "-NonInteractive",
                "-ExecutionPolicy",
                "Bypass",
                "-Command",
                script.as_str(),
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| lookup_failed(format!("timed out after {}ms", self.timeout.as_millis())))?
            .map_err(|e| lookup_failed(format!("failed to start '{}': {}", self.powershell, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(lookup_failed(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_lookup_output(exe, &String::from_utf8_lossy(&output.stdout))
    }
}

impl PackageQuery for AppxPackageQuery {
    async fn query(&self, exe: &Path) -> Result<Option<PackageIdentity>, IdentityError> {
        if !self.enabled || !cfg!(windows) || exe.as_os_str().is_empty() {
            return Ok(None);
        }

        debug!(
            event = "core.packages.query_started",
            exe = %exe.display()
        );

        self.run(exe).await
    }
}

/// Fields as emitted by the lookup script.
#[derive(Debug, Deserialize)]
struct AppxLookupRecord {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "PublisherId", default)]
    publisher_id: Option<String>,
    #[serde(rename = "InstallLocation", default)]
    install_location: Option<String>,
    #[serde(rename = "AppId", default)]
    app_id: Option<String>,
    #[serde(rename = "Logo", default)]
    logo: Option<String>,
}

/// Quote a value as a single-quoted PowerShell literal.
fn powershell_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn build_lookup_script(exe: &Path) -> String {
    format!(
        r#"$ErrorActionPreference = 'Stop'
[Console]::OutputEncoding = [System.Text.Encoding]::UTF8
$exe = {exe}
$pkg = Get-AppxPackage | Where-Object {{ $_.InstallLocation -and $exe.StartsWith($_.InstallLocation.TrimEnd('\') + '\', [System.StringComparison]::OrdinalIgnoreCase) }} | Select-Object -First 1
if (-not $pkg) {{ exit 0 }}
$manifest = Get-AppxPackageManifest $pkg
$apps = @($manifest.Package.Applications.Application)
$relative = $exe.Substring($pkg.InstallLocation.TrimEnd('\').Length).TrimStart('\')
$app = $apps | Where-Object {{ $_.Executable -ieq $relative }} | Select-Object -First 1
if (-not $app) {{ $app = $apps | Select-Object -First 1 }}
[PSCustomObject]@{{
    Name = $pkg.Name
    PublisherId = $pkg.PublisherId
    InstallLocation = $pkg.InstallLocation
    AppId = $app.Id
    Logo = $manifest.Package.Properties.Logo
}} | ConvertTo-Json -Compress"#,
        exe = powershell_literal(&exe.to_string_lossy())
    )
}

/// Parse the lookup script's stdout. Empty output means "not packaged".
fn parse_lookup_output(exe: &Path, stdout: &str) -> Result<Option<PackageIdentity>, IdentityError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let record: AppxLookupRecord =
        serde_json::from_str(trimmed).map_err(|e| IdentityError::InvalidPackageData {
            exe: exe.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(Some(PackageIdentity {
        app_id: record.app_id.unwrap_or_default(),
        package_name: record.name.unwrap_or_default(),
        publisher_id: record.publisher_id.unwrap_or_default(),
        install_location: PathBuf::from(record.install_location.unwrap_or_default()),
        logo_asset: record.logo.unwrap_or_default(),
    }))
}
