use chrono::{DateTime, Utc};
use serde_json::Value;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::errors::{FakerError, Result};

pub const STAGING_PREFIX: &str = "faked_data_archive";

/// Fresh per-run staging directory under `root`.
///
/// The timestamp keeps runs ordered; the random suffix keeps two runs in the
/// same second apart.
pub fn staging_dir_for(root: &Path, now: DateTime<Utc>) -> PathBuf {
    let id = uuid::Uuid::new_v4().simple().to_string();
    root.join(format!("{}-{}-{}", STAGING_PREFIX, now.timestamp(), &id[..8]))
}

/// Create `path` and its parents if absent.
///
/// An existing directory is fine; anything else (a file in the way, no
/// permission, full disk) is reported.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match std::fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(FakerError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Pretty-print `value` with two-space indentation into `path`
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let file = std::fs::File::create(path).map_err(FakerError::io(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| FakerError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(FakerError::io(path))?;
    Ok(())
}

/// Read and parse one source document
pub fn read_json(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path).map_err(FakerError::io(path))?;
    serde_json::from_str(&contents).map_err(|e| FakerError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_staging_dir_is_unique_per_call() {
        let now = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        let a = staging_dir_for(Path::new("/tmp"), now);
        let b = staging_dir_for(Path::new("/tmp"), now);
        assert_ne!(a, b);
        let name = a.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("faked_data_archive-1622505600-"));
        assert_eq!(a.parent(), Some(Path::new("/tmp")));
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_reports_file_in_the_way() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("taken");
        std::fs::write(&file, "x").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, FakerError::Io { .. }));
    }

    #[test]
    fn test_write_json_uses_two_space_indent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        write_json(&path, &serde_json::json!({ "a": [1] })).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1\n  ]\n}");
    }

    #[test]
    fn test_read_json_reports_malformed_input() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_json(&path), Err(FakerError::Json { .. })));
    }
}
