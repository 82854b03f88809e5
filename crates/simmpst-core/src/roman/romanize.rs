use tracing::debug;

use super::idiom::apply_idioms;
use super::tables::{RomanTables, TAGGED_FINAL};
use crate::error::{check_input, ProcessingError};
use crate::segment::{insert_boundaries, repair_subscripts, SYLLABLE_SEPARATOR};
use crate::settings::settings;
use crate::unicode::VIRAMA;

/// `ော်` and `ေါ်`.
const VOWEL_FINALS: [&str; 2] = ["\u{1031}\u{102C}\u{103A}", "\u{1031}\u{102B}\u{103A}"];

/// Trim, then fold every run of whitespace and delimiters into a single
/// delimiter.
fn collapse_whitespace(text: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_whitespace() || c == delimiter {
            if !out.ends_with(delimiter) {
                out.push(delimiter);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// `၎င်` as the segmenter leaves it: the symbol is a piece of its own.
const SPLIT_LIGATURE: &str = "\u{104E} \u{1004}\u{103A}";
const LIGATURE: &str = "\u{104E}\u{1004}\u{103A}";

/// Rejoin `၎ င်` so the table's `၎င်` entry applies. A following virama
/// means the NGA is a kinzi and stays apart.
fn fuse_ligature(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find(SPLIT_LIGATURE) {
        let after = &rest[pos + SPLIT_LIGATURE.len()..];
        out.push_str(&rest[..pos]);
        if after.starts_with(VIRAMA) {
            out.push_str(SPLIT_LIGATURE);
        } else {
            out.push_str(LIGATURE);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

fn tag_vowel_finals(text: &str) -> String {
    VOWEL_FINALS
        .iter()
        .fold(text.to_string(), |acc, pat| acc.replace(pat, TAGGED_FINAL.0))
}

/// Romanize Unicode Burmese text.
///
/// Each syllable is followed by a space and each original word gap by the
/// configured delimiter. Codepoints missing from the table pass through.
pub fn romanize(text: &str) -> Result<String, ProcessingError> {
    check_input(text)?;
    let delimiter = settings().romanizer.word_delimiter;
    let tables = RomanTables::global();

    let normalized = collapse_whitespace(text, delimiter);
    let segmented = repair_subscripts(&insert_boundaries(&normalized));
    let fused = apply_idioms(&fuse_ligature(&segmented));
    let tagged = tag_vowel_finals(&fused);
    let roman = tables.forward().replace_longest(&tagged);

    let stray = format!("{SYLLABLE_SEPARATOR}{delimiter}");
    let out = roman.replace(&stray, &delimiter.to_string());
    debug!(input_len = text.len(), output_len = out.len(), "romanize");
    Ok(out)
}
