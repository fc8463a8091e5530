//! Filesystem capability used by the installer
//!
//! The installer only needs three things from the filesystem: an existence
//! check, directory creation, and a recursive overwrite-copy. Keeping them
//! behind [`ComponentFs`] lets tests count writes and inject failures.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use walkdir::WalkDir;

/// Filesystem operations the installer depends on
#[allow(async_fn_in_trait)]
pub trait ComponentFs {
    /// Whether anything (file or directory) exists at `path`
    async fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents
    async fn ensure_dir(&self, path: &Path) -> Result<()>;

    /// Copy a file or a directory tree from `src` to `dest`, overwriting files
    /// that already exist. Returns the number of files written.
    async fn copy_recursive(&self, src: &Path, dest: &Path) -> Result<usize>;
}

/// [`ComponentFs`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ComponentFs for LocalFs {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    async fn copy_recursive(&self, src: &Path, dest: &Path) -> Result<usize> {
        let metadata = fs::metadata(src)
            .await
            .with_context(|| format!("Failed to read {}", src.display()))?;

        if metadata.is_file() {
            copy_file(src, dest).await?;
            return Ok(1);
        }

        fs::create_dir_all(dest)
            .await
            .with_context(|| format!("Failed to create directory: {}", dest.display()))?;

        let mut written = 0;
        for entry in WalkDir::new(src).min_depth(1) {
            let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
            let relative = entry
                .path()
                .strip_prefix(src)
                .with_context(|| format!("Unexpected path outside {}", src.display()))?;
            let target = dest.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).await.with_context(|| {
                    format!("Failed to create directory: {}", target.display())
                })?;
            } else {
                copy_file(entry.path(), &target).await?;
                written += 1;
            }
        }

        Ok(written)
    }
}

async fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::copy(src, dest)
        .await
        .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
    Ok(())
}
