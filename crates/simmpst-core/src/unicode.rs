//! Character-level classification for Burmese (Myanmar block) text.

/// Vowel sign E (ေ). Rendered left of its consonant, stored after it.
pub const VOWEL_E: char = '\u{1031}';
/// Vowel sign AA (ာ).
pub const VOWEL_AA: char = '\u{102C}';
/// Vowel sign tall AA (ါ), written after round-bottomed consonants.
pub const VOWEL_TALL_AA: char = '\u{102B}';
/// Sign dot below (့), the creaky tone.
pub const DOT_BELOW: char = '\u{1037}';
/// Sign visarga (း), the heavy tone.
pub const VISARGA: char = '\u{1038}';
/// Invisible stacking virama (္): the next consonant is written below.
pub const VIRAMA: char = '\u{1039}';
/// Visible killer mark (်), the syllable-final "virama" of the romanization.
pub const ASAT: char = '\u{103A}';
pub const MEDIAL_YA: char = '\u{103B}';
/// Medial RA (ြ). Rendered around the consonant, so legacy text stores it first.
pub const MEDIAL_RA: char = '\u{103C}';
pub const MEDIAL_WA: char = '\u{103D}';
pub const MEDIAL_HA: char = '\u{103E}';
/// Tone extension used by some minority-language orthographies.
pub const TONE_EXTENSION: char = '\u{AA7B}';

/// Kinzi: NGA + ASAT + VIRAMA, a nasal stacked above the next consonant.
pub const KINZI: [char; 3] = ['\u{1004}', ASAT, VIRAMA];

/// Base consonants KA..A (U+1000..U+1021).
pub fn is_consonant(c: char) -> bool {
    ('\u{1000}'..='\u{1021}').contains(&c)
}

/// Characters that start a syllable: consonants plus the independent
/// vowels U and UU.
pub fn is_syllable_base(c: char) -> bool {
    is_consonant(c) || c == '\u{1025}' || c == '\u{1026}'
}

/// Characters that can anchor a visual cluster during legacy reordering.
///
/// Broader than [`is_syllable_base`]: it also covers independent vowels,
/// the great SA, the Pali and Mon letters and the Shan digits, all of
/// which legacy fonts may precede with a left-side sign.
pub fn is_cluster_base(c: char) -> bool {
    matches!(
        c as u32,
        0x1000..=0x1029
            | 0x103F
            | 0x1050..=0x1055
            | 0x105A..=0x105D
            | 0x1061
            | 0x1065..=0x1066
            | 0x106E..=0x1070
            | 0x1075..=0x1081
            | 0x108E
            | 0x1090..=0x1099
            | 0x109E..=0x109F
    )
}

/// Consonants that may appear below a virama in a stack (KA..BHA, MA, LA).
pub fn is_stackable(c: char) -> bool {
    ('\u{1000}'..='\u{1018}').contains(&c) || c == '\u{1019}' || c == '\u{101C}'
}

/// Dependent signs that extend a syllable: vowel signs, tones, virama,
/// asat and medials (U+102B..U+103E), plus the Shan NA and the tone
/// extension.
pub fn is_dependent_sign(c: char) -> bool {
    ('\u{102B}'..='\u{103E}').contains(&c) || c == '\u{108F}' || c == TONE_EXTENSION
}

/// Consonants whose rounded bottom takes the tall AA (ါ) instead of ာ.
pub fn takes_tall_aa(c: char) -> bool {
    matches!(c, 'ခ' | 'ဂ' | 'င' | 'ဒ' | 'ပ' | 'ဝ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_consonant('က'));
        assert!(is_consonant('အ'));
        assert!(!is_consonant('ဥ'));
        assert!(is_syllable_base('ဥ'));
        assert!(is_syllable_base('ဦ'));
        assert!(!is_syllable_base('ာ'));
        assert!(!is_syllable_base('|'));
    }

    #[test]
    fn test_cluster_base_excludes_signs() {
        assert!(is_cluster_base('က'));
        assert!(is_cluster_base('ဩ'));
        assert!(is_cluster_base('ဿ'));
        assert!(is_cluster_base('႐'));
        assert!(!is_cluster_base(VOWEL_E));
        assert!(!is_cluster_base(MEDIAL_RA));
        assert!(!is_cluster_base('၀'));
    }

    #[test]
    fn test_stackable() {
        assert!(is_stackable('က'));
        assert!(is_stackable('ဘ'));
        assert!(is_stackable('မ'));
        assert!(is_stackable('လ'));
        assert!(!is_stackable('ယ'));
        assert!(!is_stackable('ရ'));
    }

    #[test]
    fn test_dependent_signs() {
        assert!(is_dependent_sign(VOWEL_TALL_AA));
        assert!(is_dependent_sign(MEDIAL_HA));
        assert!(is_dependent_sign(ASAT));
        assert!(is_dependent_sign(TONE_EXTENSION));
        assert!(!is_dependent_sign('က'));
        assert!(!is_dependent_sign('၊'));
    }

    #[test]
    fn test_tall_aa_class() {
        assert!(takes_tall_aa('ပ'));
        assert!(takes_tall_aa('ဝ'));
        assert!(!takes_tall_aa('က'));
    }
}
