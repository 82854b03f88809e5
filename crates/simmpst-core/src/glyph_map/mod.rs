//! Legacy (Zawgyi) glyph → Unicode codepoint map.
//!
//! The map is an external, read-only input: loaded once from TOML and
//! only ever used for per-character lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::ConfigError;
use crate::table::parse_table_toml;

pub const DEFAULT_GLYPH_MAP_TOML: &str = include_str!("default_glyph_map.toml");

#[derive(Debug, Clone)]
pub struct GlyphMap {
    map: HashMap<char, String>,
}

impl GlyphMap {
    /// Build a map from `(legacy, unicode)` pairs.
    ///
    /// Every key must be exactly one codepoint and every value non-empty.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ConfigError> {
        let mut map = HashMap::new();
        for (key, value) in pairs {
            let mut chars = key.chars();
            let c = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(ConfigError::InvalidKey {
                        key,
                        reason: "legacy keys must be a single codepoint",
                    })
                }
            };
            if value.is_empty() {
                return Err(ConfigError::EmptyValue(key));
            }
            map.insert(c, value);
        }
        if map.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self { map })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let gm = Self::from_pairs(parse_table_toml(toml_str)?)?;
        debug!(entries = gm.len(), "glyph map loaded");
        Ok(gm)
    }

    /// Load a glyph map TOML file.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// The embedded Zawgyi map.
    pub fn default_map() -> &'static GlyphMap {
        static INSTANCE: OnceLock<GlyphMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            GlyphMap::from_toml(DEFAULT_GLYPH_MAP_TOML).expect("glyph map TOML must be valid")
        })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(|s| s.as_str())
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    /// Replace each mapped character by its value in a single pass;
    /// replacements are never substituted again.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.map.get(&c) {
                Some(v) => out.push_str(v),
                None => out.push(c),
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
