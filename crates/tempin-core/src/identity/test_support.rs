//! In-memory ports for pipeline tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use base64::Engine;

use crate::identity::errors::IdentityError;
use crate::config::ResourcesConfig;
use crate::identity::types::PackageIdentity;
use crate::ports::backends::StaticResourcePaths;
use crate::ports::{FileSystem, ImageEncoder, PackageQuery, Ports, ResourcePaths};

pub type FakePorts = Ports<FakeFs, FakeResources, FakePackages, FakeImages>;

pub fn fake_ports(fs: &FakeFs, packages: FakePackages) -> FakePorts {
    Ports {
        fs: fs.clone(),
        resources: FakeResources::new("/res"),
        packages,
        images: FakeImages::new(),
    }
}

pub fn inline_uri(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

pub fn calculator_identity(install_location: &str) -> PackageIdentity {
    PackageIdentity {
        app_id: "App".to_string(),
        package_name: "Microsoft.WindowsCalculator".to_string(),
        publisher_id: "8wekyb3d8bbwe".to_string(),
        install_location: PathBuf::from(install_location),
        logo_asset: "Assets/CalculatorStoreLogo.png".to_string(),
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    copy_fails: bool,
    copies: Arc<AtomicUsize>,
}

impl FakeFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_copy(mut self) -> Self {
        self.copy_fails = true;
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, bytes: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), bytes.to_vec());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn copy_attempts(&self) -> usize {
        self.copies.load(Ordering::SeqCst)
    }
}

impl FileSystem for FakeFs {
    async fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.copies.fetch_add(1, Ordering::SeqCst);
        if self.copy_fails {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        let mut files = self.files.lock().unwrap();
        let bytes = files
            .get(from)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no source"))?;
        files.insert(to.to_path_buf(), bytes);
        Ok(())
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}

const TEST_URI_PREFIX: &str = "asset://localhost/";

/// Resource paths with a controllable directory. URIs are built by the real
/// backend so reference fallbacks carry production-shaped URIs.
#[derive(Debug, Clone)]
pub struct FakeResources {
    dir: Option<PathBuf>,
    uris: StaticResourcePaths,
}

impl FakeResources {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: Some(PathBuf::from(dir)),
            uris: uri_backend(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            dir: None,
            uris: uri_backend(),
        }
    }
}

fn uri_backend() -> StaticResourcePaths {
    StaticResourcePaths::from_config(&ResourcesConfig {
        uri_prefix: Some(TEST_URI_PREFIX.to_string()),
        ..ResourcesConfig::default()
    })
}

impl ResourcePaths for FakeResources {
    async fn resource_dir(&self) -> Result<PathBuf, IdentityError> {
        self.dir
            .clone()
            .ok_or_else(|| IdentityError::ResourceDirUnavailable {
                message: "no resource dir in test".to_string(),
            })
    }

    fn resource_uri(&self, path: &Path) -> String {
        self.uris.resource_uri(path)
    }
}

#[derive(Debug, Clone)]
pub enum FakePackages {
    Found(PackageIdentity),
    NotPackaged,
    Failing,
}

impl FakePackages {
    pub fn found(identity: PackageIdentity) -> Self {
        FakePackages::Found(identity)
    }

    pub fn not_packaged() -> Self {
        FakePackages::NotPackaged
    }

    pub fn failing() -> Self {
        FakePackages::Failing
    }
}

impl PackageQuery for FakePackages {
    async fn query(&self, exe: &Path) -> Result<Option<PackageIdentity>, IdentityError> {
        match self {
            FakePackages::Found(identity) => Ok(Some(identity.clone())),
            FakePackages::NotPackaged => Ok(None),
            FakePackages::Failing => Err(IdentityError::PackageLookupFailed {
                exe: exe.display().to_string(),
                message: "access denied".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeImages {
    fails: bool,
}

impl FakeImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fails: true }
    }
}

impl ImageEncoder for FakeImages {
    fn encode(&self, bytes: &[u8]) -> Result<String, IdentityError> {
        if self.fails {
            return Err(IdentityError::ImageEncodeFailed {
                message: "unsupported image format".to_string(),
            });
        }
        Ok(inline_uri(bytes))
    }
}
