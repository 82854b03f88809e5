//! Error kinds surfaced by the engine.
//!
//! `ConfigError` is fatal and only produced while loading a mapping table.
//! `ProcessingError` is per-call: a failed conversion leaves the engine
//! usable for the next one.

use std::io;

use crate::settings::settings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("unsupported table version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid key {key:?}: {reason}")]
    InvalidKey { key: String, reason: &'static str },
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("mapping table already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProcessingError {
    #[error("input of {len} characters exceeds the limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

/// Reject inputs longer than `limits.max_input_chars`.
pub(crate) fn check_input(text: &str) -> Result<(), ProcessingError> {
    let max = settings().limits.max_input_chars;
    let len = text.chars().count();
    if len > max {
        return Err(ProcessingError::InputTooLong { len, max });
    }
    Ok(())
}
