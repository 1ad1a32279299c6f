// src/core/archiver.rs
//! Zip packaging of a generated portfolio

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::types::GeneratedFiles;

pub const DOWNLOAD_NAME: &str = "portfolio.zip";

#[derive(Debug, Clone)]
pub struct Archiver {
    output_root: PathBuf,
}

impl Archiver {
    pub fn new(output_root: PathBuf) -> Self {
        Self { output_root }
    }

    /// Zip every generated file and return the archive bytes.
    ///
    /// The archive is written inside a private temporary directory under the
    /// output root. That directory is removed when this returns, whether
    /// packaging succeeded or not.
    pub fn package(&self, files: &GeneratedFiles) -> Result<Vec<u8>> {
        std::fs::create_dir_all(&self.output_root).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.output_root.display()
            )
        })?;

        let workspace = tempfile::Builder::new()
            .prefix("portfolio_")
            .tempdir_in(&self.output_root)
            .context("Failed to create temporary directory")?;

        let zip_path = workspace.path().join(format!(
            "portfolio_{}.zip",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ));

        let file = File::create(&zip_path)
            .with_context(|| format!("Failed to create archive: {}", zip_path.display()))?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, content) in files {
            zip.start_file(name.as_str(), options)
                .with_context(|| format!("Failed to add '{}' to archive", name))?;
            zip.write_all(content)
                .with_context(|| format!("Failed to write '{}' to archive", name))?;
            debug!("Archived {} ({} bytes)", name, content.len());
        }

        let mut writer = zip.finish().context("Failed to finalize archive")?;
        writer.flush().context("Failed to flush archive")?;
        drop(writer);

        let bytes = std::fs::read(&zip_path)
            .with_context(|| format!("Failed to read archive: {}", zip_path.display()))?;

        info!(
            "Packaged {} files into {} ({} bytes)",
            files.len(),
            zip_path.display(),
            bytes.len()
        );

        workspace
            .close()
            .context("Failed to remove temporary archive directory")?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn read_entry(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
        let mut entry = archive.by_name(name).unwrap();
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_package_two_entries() {
        let root = tempfile::tempdir().unwrap();
        let archiver = Archiver::new(root.path().to_path_buf());

        let mut files = GeneratedFiles::new();
        files.insert("a.html".to_string(), b"x".to_vec());
        files.insert("b.css".to_string(), b"y".to_vec());

        let bytes = archiver.package(&files).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.len(), 2);
        assert_eq!(read_entry(&mut archive, "a.html"), b"x");
        assert_eq!(read_entry(&mut archive, "b.css"), b"y");
    }

    #[test]
    fn test_package_keeps_nested_paths_and_binary() {
        let root = tempfile::tempdir().unwrap();
        let archiver = Archiver::new(root.path().to_path_buf());

        let png = vec![0x89, b'P', b'N', b'G', 0x00, 0xFF, 0x10];
        let mut files = GeneratedFiles::new();
        files.insert("assets/img/logo.png".to_string(), png.clone());

        let bytes = archiver.package(&files).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(read_entry(&mut archive, "assets/img/logo.png"), png);
    }

    #[test]
    fn test_package_cleans_up_temporary_files() {
        let root = tempfile::tempdir().unwrap();
        let archiver = Archiver::new(root.path().to_path_buf());

        let mut files = GeneratedFiles::new();
        files.insert("index.html".to_string(), b"<html></html>".to_vec());
        archiver.package(&files).unwrap();
        archiver.package(&files).unwrap();

        let leftovers = std::fs::read_dir(root.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_package_empty_set_is_valid_zip() {
        let root = tempfile::tempdir().unwrap();
        let bytes = Archiver::new(root.path().to_path_buf())
            .package(&GeneratedFiles::new())
            .unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
