//! Property-based checks over generated text.

use proptest::prelude::*;

use super::converter;
use crate::glyph_map::GlyphMap;
use crate::legacy::zawgyi_to_unicode;
use crate::reorder::reorder_clusters;
use crate::segment::{insert_boundaries, segment, SYLLABLE_SEPARATOR};
use crate::SegmentMode;

/// Burmese letters and signs plus ASCII filler, weighted toward Burmese.
fn arb_mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => "[\u{1000}-\u{104F}]",
            1 => "[a-z0-9 ,.\n]",
            1 => Just("\u{AA7B}".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Unicode-ordered text whose clusters are already canonical: no
/// left-side signs, stacks, kinzi or multiple medials.
fn arb_canonical_text() -> impl Strategy<Value = String> {
    "[\u{1000}-\u{1021}\u{102C}\u{102D}\u{102E}\u{102F}\u{1030}\u{1032}\u{1036}\u{1037}\u{103A}\u{103B}\u{1038}\u{1040}-\u{1049}a-z ]{0,40}"
}

proptest! {
    #[test]
    fn segmentation_is_total_and_lossless(text in arb_mixed_text()) {
        let pieces = segment(&text);
        prop_assert_eq!(pieces.concat(), text.clone());
        prop_assert!(pieces.iter().all(|p| !p.is_empty()));

        let out = converter()
            .syllable_tokenization(SegmentMode::WithoutVirama, &text)
            .unwrap();
        prop_assert!(out.starts_with("Without the virama mark: "));
    }

    #[test]
    fn boundaries_only_add_separators(text in arb_mixed_text()) {
        let with = insert_boundaries(&text);
        let stripped: String = with.chars().filter(|&c| c != SYLLABLE_SEPARATOR).collect();
        let original: String = text.chars().filter(|&c| c != SYLLABLE_SEPARATOR).collect();
        prop_assert_eq!(stripped, original);
    }

    #[test]
    fn reorder_is_idempotent_on_canonical_text(text in arb_canonical_text()) {
        prop_assert_eq!(reorder_clusters(&text), text);
    }

    #[test]
    fn converter_without_matching_keys_is_noop(text in arb_canonical_text()) {
        // Only keys outside the generated alphabet.
        let glyphs = GlyphMap::from_pairs([
            ("\u{1064}".to_string(), "င်္".to_string()),
            ("\u{107B}".to_string(), "္ဘ".to_string()),
        ])
        .unwrap();
        let once = zawgyi_to_unicode(&glyphs, &text).unwrap();
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(zawgyi_to_unicode(&glyphs, &once).unwrap(), once);
    }

    #[test]
    fn romanize_never_fails(text in arb_mixed_text()) {
        let conv = converter();
        let roman = conv.romanize(&text).unwrap();
        prop_assert!(!roman.contains('\n'));
        let back = conv.deromanize(&roman);
        prop_assert!(!back.starts_with("Error: "));
    }

    #[test]
    fn ascii_letters_survive_romanization(word in "[a-z0-9]{1,12}") {
        let roman = converter().romanize(&word).unwrap();
        let letters: String = roman.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(letters, word);
    }
}
