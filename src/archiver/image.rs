use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::staging::ensure_dir;
use crate::common::errors::{FakerError, Result};
use crate::redact::PLACEHOLDER_URI;

pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 600;

/// Binary PPM header for the blank image
pub fn ppm_header() -> String {
    format!("P6\n{} {}\n255\n", WIDTH, HEIGHT)
}

/// Complete contents of the placeholder: an all-white 800x600 PPM.
///
/// It is stored under a `.jpg` name because every redacted `uri` points at
/// that path; consumers get PPM bytes regardless of the extension.
pub fn ppm_bytes() -> Vec<u8> {
    let header = ppm_header();
    let mut bytes = Vec::with_capacity(header.len() + WIDTH * HEIGHT * 3);
    bytes.extend_from_slice(header.as_bytes());
    bytes.resize(header.len() + WIDTH * HEIGHT * 3, 255);
    bytes
}

/// Write the placeholder into `staging_dir` and return its full path
pub fn write_placeholder(staging_dir: &Path) -> Result<PathBuf> {
    let path = staging_dir.join(PLACEHOLDER_URI);
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let file = std::fs::File::create(&path).map_err(FakerError::io(&path))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&ppm_bytes())
        .and_then(|_| writer.flush())
        .map_err(FakerError::io(&path))?;

    tracing::debug!("Wrote placeholder image: {}", path.display());
    Ok(path)
}
