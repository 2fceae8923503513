use std::path::PathBuf;

use thiserror::Error;

use crate::redact::RedactError;

/// Error types for fake-export operations.
/// We use `anyhow` at the top level for CLI error handling,
/// but these typed errors allow modules to be precise about failures.
#[derive(Debug, Error)]
pub enum FakerError {
    /// A required argument is missing or empty
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The TOML config file could not be read or parsed
    #[error("Config error in '{}': {message}", path.display())]
    ConfigFile { path: PathBuf, message: String },

    /// The source directory does not exist
    #[error("Source directory not found: '{}'", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document contained a value the redactor has no rule for
    #[error("Cannot redact '{}'", path.display())]
    Redact {
        path: PathBuf,
        #[source]
        source: RedactError,
    },

    /// Malformed JSON input or a serialization failure
    #[error("JSON error in '{}'", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File system operation failed
    #[error("I/O error at '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Failed to walk directory tree")]
    Walk {
        #[from]
        source: walkdir::Error,
    },

    /// Writing the zip archive failed
    #[error("Archive error at '{}'", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl FakerError {
    pub fn config(message: impl Into<String>) -> Self {
        FakerError::Configuration {
            message: message.into(),
        }
    }

    /// Attach a path to an I/O error. Used as `.map_err(FakerError::io(path))`.
    pub fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| FakerError::Io { path, source }
    }
}

pub type Result<T> = std::result::Result<T, FakerError>;
