use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::report::Progress;
use super::staging::ensure_dir;
use crate::common::errors::{FakerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackSummary {
    pub entries: usize,
    pub archive_bytes: u64,
}

/// Archive entry name for a staged file: relative to the staging root,
/// always `/`-separated.
pub fn entry_name(staging_dir: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(staging_dir).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// Zip every regular file under `staging_dir` into `archive_path`,
/// replacing any existing archive.
pub fn pack(
    staging_dir: &Path,
    archive_path: &Path,
    total: usize,
    progress: &mut dyn Progress,
) -> Result<PackSummary> {
    if let Some(parent) = archive_path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }

    let file = std::fs::File::create(archive_path).map_err(FakerError::io(archive_path))?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);
    let zip_err = |source| FakerError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };

    let mut archived = 0usize;
    for entry in WalkDir::new(staging_dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(name) = entry_name(staging_dir, path) else {
            continue;
        };

        zip.start_file(name.as_str(), options).map_err(zip_err)?;
        {
            let mut staged = std::fs::File::open(path).map_err(FakerError::io(path))?;
            std::io::copy(&mut staged, &mut zip).map_err(FakerError::io(path))?;
        }

        archived += 1;
        tracing::debug!("Archived {} as {}", path.display(), name);
        progress.entry_archived(path, &name, archived, total);
    }

    zip.finish().map_err(zip_err)?;

    let archive_bytes = std::fs::metadata(archive_path)
        .map_err(FakerError::io(archive_path))?
        .len();

    Ok(PackSummary {
        entries: archived,
        archive_bytes,
    })
}
