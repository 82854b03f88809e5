//! Zawgyi → Unicode conversion: glyph substitution followed by cluster
//! reordering.

use tracing::debug;

use crate::error::{check_input, ProcessingError};
use crate::glyph_map::GlyphMap;
use crate::reorder::reorder_clusters;

/// Convert legacy visual-order text to Unicode logical order.
///
/// Characters outside the glyph map pass through unchanged; malformed
/// sequences are converted as far as the map and the cluster grammar
/// allow, never rejected.
pub fn zawgyi_to_unicode(glyphs: &GlyphMap, text: &str) -> Result<String, ProcessingError> {
    check_input(text)?;
    let substituted = glyphs.substitute(text);
    let out = reorder_clusters(&substituted);
    debug!(input_len = text.len(), output_len = out.len(), "zawgyi_to_unicode");
    Ok(out)
}
