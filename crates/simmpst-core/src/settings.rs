//! Engine limits, segmenter labels and the romanizer's word delimiter.
//!
//! Read once per process. Call [`init_custom`] before the first
//! conversion to replace the embedded `default_settings.toml`.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::roman::{parse_roman_toml, token_uses, DEFAULT_ROMAN_TOML};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub limits: LimitSettings,
    pub segmenter: SegmenterSettings,
    pub romanizer: RomanizerSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub max_input_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterSettings {
    pub with_virama_label: String,
    pub without_virama_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomanizerSettings {
    pub word_delimiter: char,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.limits.max_input_chars == 0 {
        return Err(SettingsError::InvalidValue {
            field: "limits.max_input_chars".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    // Segmented as a one-character syllable; letters would be romanized.
    let d = s.romanizer.word_delimiter;
    if !d.is_ascii_punctuation() {
        return Err(SettingsError::InvalidValue {
            field: "romanizer.word_delimiter".to_string(),
            reason: "must be a single ASCII punctuation character".to_string(),
        });
    }
    let tokens = parse_roman_toml(DEFAULT_ROMAN_TOML).expect("romanization TOML must be valid");
    if token_uses(&tokens, d) {
        return Err(SettingsError::InvalidValue {
            field: "romanizer.word_delimiter".to_string(),
            reason: format!("{d:?} is part of a romanization token"),
        });
    }

    Ok(())
}
