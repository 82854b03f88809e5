//! Syllable segmentation of Unicode Burmese text.
//!
//! A syllable is a base (consonant, independent U/UU) followed by any
//! number of tails, tried in this order at each step:
//!
//! 1. the kinzi `င်္`,
//! 2. a closed final: consonant, `ှ`*, `့`/`း`*, asat,
//! 3. a stacked consonant: consonant + virama,
//! 4. a dependent sign followed by any number of tone extensions.
//!
//! Every other character is a syllable of its own, except a line feed,
//! which is passed through without a separator.

use tracing::debug;

use crate::error::{check_input, ProcessingError};
use crate::settings::settings;
use crate::unicode::{
    is_consonant, is_dependent_sign, is_syllable_base, ASAT, DOT_BELOW, KINZI, MEDIAL_HA,
    TONE_EXTENSION, VIRAMA, VISARGA,
};

/// Separator written after each syllable.
pub const SYLLABLE_SEPARATOR: char = ' ';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    /// Restore an explicit asat where a stack was split across syllables.
    WithVirama,
    WithoutVirama,
}

fn closed_final_len(rest: &[char]) -> Option<usize> {
    if !is_consonant(*rest.first()?) {
        return None;
    }
    let mut pos = 1;
    while rest.get(pos) == Some(&MEDIAL_HA) {
        pos += 1;
    }
    while matches!(rest.get(pos), Some(&DOT_BELOW) | Some(&VISARGA)) {
        pos += 1;
    }
    (rest.get(pos) == Some(&ASAT)).then_some(pos + 1)
}

fn tail_len(rest: &[char]) -> Option<usize> {
    if rest.starts_with(&KINZI) {
        return Some(KINZI.len());
    }
    if let Some(n) = closed_final_len(rest) {
        return Some(n);
    }
    match rest {
        [c, VIRAMA, ..] if is_consonant(*c) => Some(2),
        [c, ..] if is_dependent_sign(*c) => {
            let extensions = rest[1..]
                .iter()
                .take_while(|&&c| c == TONE_EXTENSION)
                .count();
            Some(1 + extensions)
        }
        _ => None,
    }
}

/// Length in chars of the piece starting at `rest[0]`.
fn piece_len(rest: &[char]) -> usize {
    match rest.first() {
        Some(&c) if is_syllable_base(c) => {
            let mut pos = 1;
            while let Some(n) = tail_len(&rest[pos..]) {
                pos += n;
            }
            pos
        }
        Some(_) => 1,
        None => 0,
    }
}

/// Split `text` into syllables. Line feeds come back as their own pieces;
/// concatenating the result always reproduces `text`.
pub fn segment(text: &str) -> Vec<&str> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut i = 0;
    let mut byte = 0;
    while i < chars.len() {
        let n = piece_len(&chars[i..]);
        let bytes: usize = chars[i..i + n].iter().map(|c| c.len_utf8()).sum();
        pieces.push(&text[byte..byte + bytes]);
        i += n;
        byte += bytes;
    }
    pieces
}

/// Insert [`SYLLABLE_SEPARATOR`] after every syllable.
pub fn insert_boundaries(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for piece in segment(text) {
        out.push_str(piece);
        if piece != "\n" {
            out.push(SYLLABLE_SEPARATOR);
        }
    }
    out
}

/// Rewrite `consonant + virama + separator + consonant` as
/// `consonant + asat + separator + consonant`.
///
/// Segmentation splits a stack after the virama, which would otherwise
/// leave an invisible killer at the end of a syllable.
pub fn repair_subscripts(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if let [a, VIRAMA, SYLLABLE_SEPARATOR, b, ..] = &chars[i..] {
            if is_consonant(*a) && is_consonant(*b) {
                out.extend([*a, ASAT, SYLLABLE_SEPARATOR, *b]);
                i += 4;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Segment `text` and prefix it with the label of `mode`.
pub fn syllable_tokenization(mode: SegmentMode, text: &str) -> Result<String, ProcessingError> {
    check_input(text)?;
    let labels = &settings().segmenter;
    let segmented = insert_boundaries(text);
    let out = match mode {
        SegmentMode::WithVirama => {
            format!("{}{}", labels.with_virama_label, repair_subscripts(&segmented))
        }
        SegmentMode::WithoutVirama => format!("{}{}", labels.without_virama_label, segmented),
    };
    debug!(?mode, input_len = text.len(), "syllable_tokenization");
    Ok(out)
}
