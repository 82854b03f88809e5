//! Burmese script conversion: Zawgyi → Unicode, syllable segmentation and
//! reversible romanization.
//!
//! Re-exports the engine from `simmpst-core` and owns process-level
//! setup such as tracing.

mod trace_init;

pub use simmpst_core::{
    converter, error, glyph_map, legacy, reorder, roman, segment, settings, table, unicode,
};
pub use simmpst_core::{BurmeseConverter, ConfigError, GlyphMap, ProcessingError, SegmentMode};
pub use trace_init::{init_tracing, TRACE_FILE};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), "0.1.0");
    }

    #[test]
    fn test_init_tracing_is_safe_to_repeat() {
        let dir = tempfile::tempdir().unwrap();
        init_tracing(dir.path());
        init_tracing(dir.path());
        let conv = BurmeseConverter::default();
        assert_eq!(conv.romanize("ကော်").unwrap(), "koo ");
        if !cfg!(feature = "trace") {
            assert!(!dir.path().join(TRACE_FILE).exists());
        }
    }
}
