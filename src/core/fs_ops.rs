// src/core/fs_ops.rs
//! File system helpers shared by the template repository and the archiver

use anyhow::{Context, Result};
use async_recursion::async_recursion;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::utils::entry_name;

pub struct FsOps;

impl FsOps {
    /// Ensure directory exists
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            debug!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
        fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Every regular file below `root`, as (`/`-separated relative name, absolute path)
    pub async fn list_files_recursive(root: &Path) -> Result<Vec<(String, PathBuf)>> {
        let mut files = Vec::new();
        collect_files(root, root, &mut files).await?;
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

#[async_recursion]
async fn collect_files(
    root: &Path,
    dir_path: &Path,
    files: &mut Vec<(String, PathBuf)>,
) -> Result<()> {
    let mut entries = fs::read_dir(dir_path)
        .await
        .with_context(|| format!("Failed to read directory: {}", dir_path.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let metadata = fs::metadata(&path)
            .await
            .with_context(|| format!("Failed to stat: {}", path.display()))?;

        if metadata.is_dir() {
            collect_files(root, &path, files).await?;
        } else if metadata.is_file() {
            let relative = path.strip_prefix(root).with_context(|| {
                format!("{} is outside {}", path.display(), root.display())
            })?;
            files.push((entry_name(relative), path.clone()));
        }
    }

    Ok(())
}
