use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Observer for per-file progress.
///
/// Counters live in the archiver run; implementations only see snapshots.
pub trait Progress {
    /// A source document was redacted and written into the staging tree
    fn document_redacted(&mut self, _source: &Path, _staged: &Path, _redacted: usize) {}

    /// A staged file was added to the archive. `total` counts every JSON
    /// document plus the placeholder image.
    fn entry_archived(&mut self, _staged: &Path, _entry: &str, _archived: usize, _total: usize) {}
}

/// Progress sink that ignores every event
#[derive(Debug, Default)]
pub struct Silent;

impl Progress for Silent {}

/// Summary of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub source_dir: PathBuf,
    pub archive_file: PathBuf,
    pub staging_dir: PathBuf,

    /// JSON documents redacted into the staging tree
    pub json_files: usize,

    /// Regular files left out because they are not JSON
    pub skipped_files: usize,

    /// Version-control directories pruned from the walk
    pub skipped_vcs_dirs: usize,

    /// Entries written to the zip, placeholder image included
    pub archived_entries: usize,

    pub archive_bytes: u64,
    pub started_at: DateTime<Utc>,
    pub duration_secs: f64,
}
