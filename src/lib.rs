//! # fake-export
//!
//! Builds a privacy-scrubbed replica of a personal data export so import
//! pipelines can be tested against realistic-shaped input.
//!
//! - **Shape-preserving redaction**: every JSON leaf is replaced by a safe
//!   placeholder of the same type, keys and array lengths are kept
//! - **Mirrored staging tree**: redacted documents land at the same relative
//!   paths, version-control metadata is skipped
//! - **One placeholder image** that every redacted `uri` points at
//! - **Single zip archive** as the durable output

pub mod archiver;
pub mod cli;
pub mod common;
pub mod redact;
