use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::{FakerError, Result};

/// Defaults that may be supplied through `--config <FILE>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Where the finished zip is written
    #[serde(default = "default_archive_file")]
    pub archive_file: PathBuf,

    /// Parent directory for per-run staging trees
    #[serde(default = "default_staging_root")]
    pub staging_root: PathBuf,
}

fn default_archive_file() -> PathBuf {
    PathBuf::from("/tmp/data.zip")
}
fn default_staging_root() -> PathBuf {
    PathBuf::from("/tmp")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive_file: default_archive_file(),
            staging_root: default_staging_root(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let contents = std::fs::read_to_string(path).map_err(|e| FakerError::ConfigFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&contents).map_err(|message| FakerError::ConfigFile {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }
}

/// Fully validated inputs for one archiver run
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub source_dir: PathBuf,
    pub archive_file: PathBuf,
    pub staging_root: PathBuf,
}

impl RunOptions {
    /// Merge command-line values over the config file and reject empty paths.
    ///
    /// Nothing touches the filesystem here, so a bad invocation fails before
    /// any traversal or archive write.
    pub fn resolve(
        source: Option<&str>,
        archive: Option<&str>,
        staging_root: Option<&str>,
        config: &Config,
    ) -> Result<Self> {
        let source_dir = match source {
            Some(s) if !s.is_empty() => PathBuf::from(s),
            _ => return Err(FakerError::config("invalid data source: --source-directory is required")),
        };

        let archive_file = match archive {
            Some(a) => PathBuf::from(a),
            None => config.archive_file.clone(),
        };
        if archive_file.as_os_str().is_empty() {
            return Err(FakerError::config("invalid archive file path"));
        }

        let staging_root = match staging_root {
            Some(s) => PathBuf::from(s),
            None => config.staging_root.clone(),
        };
        if staging_root.as_os_str().is_empty() {
            return Err(FakerError::config("invalid staging root"));
        }

        Ok(Self {
            source_dir,
            archive_file,
            staging_root,
        })
    }
}
