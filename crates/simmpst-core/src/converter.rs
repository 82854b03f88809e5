//! One handle over the four conversions.
//!
//! The converter owns the legacy glyph map it was built with; the
//! romanization tables and settings are process-wide and read-only, so a
//! converter can be shared across threads freely.

use std::path::Path;

use crate::error::{ConfigError, ProcessingError};
use crate::glyph_map::GlyphMap;
use crate::legacy::zawgyi_to_unicode;
use crate::roman::{deromanize, romanize};
use crate::segment::{syllable_tokenization, SegmentMode};

#[derive(Debug, Clone)]
pub struct BurmeseConverter {
    glyphs: GlyphMap,
}

impl BurmeseConverter {
    pub fn new(glyphs: GlyphMap) -> Self {
        Self { glyphs }
    }

    /// Load the glyph map from a TOML file.
    pub fn open(glyph_map_path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::new(GlyphMap::open(glyph_map_path)?))
    }

    /// Converter over the embedded Zawgyi map.
    pub fn with_default_map() -> Self {
        Self::new(GlyphMap::default_map().clone())
    }

    pub fn glyph_map(&self) -> &GlyphMap {
        &self.glyphs
    }

    pub fn zawgyi_to_unicode(&self, text: &str) -> Result<String, ProcessingError> {
        zawgyi_to_unicode(&self.glyphs, text)
    }

    pub fn syllable_tokenization(
        &self,
        mode: SegmentMode,
        text: &str,
    ) -> Result<String, ProcessingError> {
        syllable_tokenization(mode, text)
    }

    pub fn romanize(&self, text: &str) -> Result<String, ProcessingError> {
        romanize(text)
    }

    /// Never fails; see [`deromanize`].
    pub fn deromanize(&self, text: &str) -> String {
        deromanize(text)
    }
}

impl Default for BurmeseConverter {
    fn default() -> Self {
        Self::with_default_map()
    }
}
