//! Rule-based conversion of Burmese script between the legacy Zawgyi font
//! encoding, Unicode logical order, and an ASCII romanization.

pub mod converter;
pub mod error;
pub mod glyph_map;
pub mod legacy;
pub mod reorder;
pub mod roman;
pub mod segment;
pub mod settings;
pub mod table;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use converter::BurmeseConverter;
pub use error::{ConfigError, ProcessingError};
pub use glyph_map::GlyphMap;
pub use segment::SegmentMode;
