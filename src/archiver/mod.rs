//! Builds the redacted staging tree from a source export and zips it.

pub mod image;
pub mod packager;
pub mod report;
pub mod staging;

use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

use crate::common::config::RunOptions;
use crate::common::errors::{FakerError, Result};
use crate::redact;

pub use packager::{pack, PackSummary};
pub use report::{Progress, RunReport, Silent};

/// Directory name marking version-control metadata
pub const VCS_DIR: &str = ".git";

/// Whether a walk entry is a version-control directory to prune
pub fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == VCS_DIR
}

pub fn is_json_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(".json"))
        .unwrap_or(false)
}

/// Whether a walk entry is the staging directory of the current run
fn is_staging_dir(entry: &DirEntry, staging_dir: &Path, canonical: Option<&Path>) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    if entry.path() == staging_dir {
        return true;
    }
    match (canonical, std::fs::canonicalize(entry.path())) {
        (Some(staging), Ok(path)) => path == staging,
        _ => false,
    }
}

/// Regular files, plus symlinks that resolve to one
fn is_regular_or_linked_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Redact every JSON document under `options.source_dir` into a fresh
/// staging tree, then pack that tree into `options.archive_file`.
///
/// The first error aborts the run; a failed run may leave a partial staging
/// tree behind and no usable archive.
pub fn run(options: &RunOptions, progress: &mut dyn Progress) -> Result<RunReport> {
    let source = options.source_dir.as_path();
    let metadata = std::fs::metadata(source).map_err(|e| FakerError::SourceNotFound {
        path: source.to_path_buf(),
        source: e,
    })?;
    if !metadata.is_dir() {
        return Err(FakerError::config(format!(
            "source is not a directory: {}",
            source.display()
        )));
    }

    let started_at = Utc::now();
    let timer = Instant::now();
    let staging_dir = staging::staging_dir_for(&options.staging_root, started_at);
    tracing::info!(
        "Redacting {} into {}",
        source.display(),
        staging_dir.display()
    );

    image::write_placeholder(&staging_dir)?;

    let mut json_files = 0usize;
    let mut skipped_files = 0usize;
    let mut skipped_vcs_dirs = 0usize;
    // the staging tree may sit inside the source when --staging-root points there
    let staging_canonical = std::fs::canonicalize(&staging_dir).ok();

    let walker = WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if is_vcs_dir(e) {
                tracing::debug!("Skipping version-control dir: {}", e.path().display());
                skipped_vcs_dirs += 1;
                false
            } else {
                !is_staging_dir(e, &staging_dir, staging_canonical.as_deref())
            }
        });

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        let Ok(rel) = path.strip_prefix(source) else {
            continue;
        };
        let staged = staging_dir.join(rel);

        if entry.file_type().is_dir() {
            staging::ensure_dir(&staged)?;
            continue;
        }
        if !is_json_file(path) || !is_regular_or_linked_file(&entry) {
            skipped_files += 1;
            continue;
        }

        let document = staging::read_json(path)?;
        let redacted = redact::redact_document(document).map_err(|e| FakerError::Redact {
            path: path.to_path_buf(),
            source: e,
        })?;
        staging::write_json(&staged, &redacted)?;

        json_files += 1;
        tracing::debug!("Redacted {}", path.display());
        progress.document_redacted(path, &staged, json_files);
    }

    // every JSON document plus the placeholder image
    let total = json_files + 1;
    let packed = pack(&staging_dir, &options.archive_file, total, progress)?;

    let report = RunReport {
        source_dir: options.source_dir.clone(),
        archive_file: options.archive_file.clone(),
        staging_dir,
        json_files,
        skipped_files,
        skipped_vcs_dirs,
        archived_entries: packed.entries,
        archive_bytes: packed.archive_bytes,
        started_at,
        duration_secs: timer.elapsed().as_secs_f64(),
    };
    tracing::info!(
        "Archived {} entries into {}",
        report.archived_entries,
        report.archive_file.display()
    );
    Ok(report)
}
