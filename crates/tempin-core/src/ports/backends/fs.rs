use std::io;
use std::path::Path;

use tracing::debug;

use crate::ports::FileSystem;

/// [`FileSystem`] over `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl FileSystem for TokioFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::try_exists(path).await {
            Ok(exists) => exists,
            Err(e) => {
                debug!(
                    event = "core.fs.exists_check_failed",
                    path = %path.display(),
                    error = %e
                );
                false
            }
        }
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        if let Some(parent) = to.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::copy(from, to).await?;
        Ok(())
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}
