use tracing::debug;

use super::idiom::restore_idiom;
use super::tables::RomanTables;
use crate::error::{check_input, ProcessingError};
use crate::settings::settings;
use crate::unicode::{
    is_consonant, takes_tall_aa, ASAT, DOT_BELOW, VISARGA, VOWEL_AA, VOWEL_E, VOWEL_TALL_AA,
};

/// `a` is shared by အ, ါ and ာ; at the start of a token it can only be
/// the consonant.
const INITIAL_A: (char, char) = ('a', 'အ');

const KINZI_STR: &str = "\u{1004}\u{103A}\u{1039}";
/// ဏ္ဍ, written back for an `F` that has no consonant to stack on.
const RETROFLEX_STACK: &str = "\u{100F}\u{1039}\u{100D}";

/// Rebuild Burmese text from romanized text.
///
/// Best effort: the result is script-valid but not necessarily the text
/// that was romanized. Faults are reported in-band as `Error: ...`
/// instead of failing the call.
pub fn deromanize(text: &str) -> String {
    match try_deromanize(text) {
        Ok(out) => out,
        Err(e) => {
            debug!("deromanize failed: {e}");
            format!("Error: {e}")
        }
    }
}

fn try_deromanize(text: &str) -> Result<String, ProcessingError> {
    check_input(text)?;
    let delimiter = settings().romanizer.word_delimiter;
    let tables = RomanTables::global();

    let mut words = Vec::new();
    let mut token_count = 0;
    for word in text.split(delimiter) {
        let syllables: Vec<String> = word
            .split_whitespace()
            .map(|tok| match restore_idiom(tok) {
                Some(written) => written.to_string(),
                None => rebuild_token(tables, tok),
            })
            .collect();
        if syllables.is_empty() {
            continue;
        }
        token_count += syllables.len();
        words.push(join_syllables(&syllables));
    }

    let out = words.join(" ");
    debug!(input_len = text.len(), token_count, "deromanize");
    Ok(out)
}

/// Join the syllables of one word with spaces.
///
/// A syllable ending in the kinzi stacks on the next one when that starts
/// with a consonant. With nothing to stack on, the shared `F` token stood
/// for the ဏ္ဍ stack instead.
fn join_syllables(syllables: &[String]) -> String {
    let mut out = String::new();
    let mut iter = syllables.iter().peekable();
    while let Some(syllable) = iter.next() {
        let next_starts_consonant = iter
            .peek()
            .and_then(|next| next.chars().next())
            .is_some_and(is_consonant);
        match syllable.strip_suffix(KINZI_STR) {
            Some(_) if next_starts_consonant => {
                out.push_str(syllable);
                continue;
            }
            Some(stem) => {
                out.push_str(stem);
                out.push_str(RETROFLEX_STACK);
            }
            None => out.push_str(syllable),
        }
        if iter.peek().is_some() {
            out.push(' ');
        }
    }
    out
}

fn rebuild_token(tables: &RomanTables, token: &str) -> String {
    let mut burmese = String::with_capacity(token.len() * 3);
    let rest = match token.strip_prefix(INITIAL_A.0) {
        Some(rest) => {
            burmese.push(INITIAL_A.1);
            rest
        }
        None => token,
    };
    burmese.push_str(&tables.inverse().replace_longest(rest));
    insert_final_asat(&correct_tall_aa(&burmese))
}

/// Round-bottomed consonants take ါ: `ပာ` → `ပါ`, `ခော်` → `ခေါ်`.
fn correct_tall_aa(text: &str) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    for i in 0..chars.len() {
        if !takes_tall_aa(chars[i]) {
            continue;
        }
        let mut j = i + 1;
        if chars.get(j) == Some(&VOWEL_E) {
            j += 1;
        }
        if chars.get(j) == Some(&VOWEL_AA) {
            chars[j] = VOWEL_TALL_AA;
        }
    }
    chars.into_iter().collect()
}

/// Restore the asat the forward table drops.
///
/// A token with two or more consonants is a closed syllable when its last
/// consonant is followed only by tone marks; the asat goes right after
/// that consonant and any dot below. Doubled asats collapse to one.
fn insert_final_asat(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let consonants = chars.iter().filter(|&&c| is_consonant(c)).count();
    let last = chars.iter().rposition(|&c| is_consonant(c));

    let mut out = match last {
        Some(last)
            if consonants >= 2
                && chars[last + 1..]
                    .iter()
                    .all(|&c| matches!(c, DOT_BELOW | VISARGA | ASAT)) =>
        {
            let dots = chars[last + 1..]
                .iter()
                .take_while(|&&c| c == DOT_BELOW)
                .count();
            let split = last + 1 + dots;
            let mut v = Vec::with_capacity(chars.len() + 1);
            v.extend_from_slice(&chars[..split]);
            v.push(ASAT);
            v.extend_from_slice(&chars[split..]);
            v
        }
        _ => chars,
    };

    out.dedup_by(|a, b| *a == ASAT && *b == ASAT);
    out.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllables() {
        assert_eq!(deromanize("k"), "က");
        assert_eq!(deromanize("kiu"), "ကို");
        assert_eq!(deromanize("mii:"), "မီး");
    }

    #[test]
    fn test_tall_aa_correction() {
        assert_eq!(deromanize("pa"), "ပါ");
        assert_eq!(deromanize("Koo"), "ခေါ်");
        assert_eq!(deromanize("ka"), "ကာ");
        // medial between consonant and vowel: no correction
        assert_eq!(deromanize("pRea"), "ပြော");
    }

    #[test]
    fn test_final_asat_inserted() {
        assert_eq!(deromanize("lip"), "လိပ်");
        assert_eq!(deromanize("mc:"), "မင်း");
        assert_eq!(deromanize("kRQ."), "ကြည့်");
    }

    #[test]
    fn test_no_asat_after_open_vowel() {
        assert_eq!(deromanize("kRea"), "ကြော");
    }

    #[test]
    fn test_kinzi_stacks_on_next_syllable() {
        assert_eq!(deromanize("aF g lip "), "အင်္ဂ လိပ်");
        assert_eq!(deromanize("jF Bea "), "သင်္ဘော");
    }

    #[test]
    fn test_trailing_f_is_retroflex_stack() {
        assert_eq!(deromanize("kF "), "ကဏ္ဍ");
        assert_eq!(deromanize("F"), "ဏ္ဍ");
        // a word gap ends the stack
        assert_eq!(deromanize("kF, k "), "ကဏ္ဍ က");
        // not a consonant: nothing to stack on
        assert_eq!(deromanize("kF 7"), "ကဏ္ဍ 7");
    }

    #[test]
    fn test_initial_a_is_consonant() {
        assert_eq!(deromanize("a"), "အ");
        assert_eq!(deromanize("aa"), "အာ");
    }

    #[test]
    fn test_idiom_restored() {
        assert_eq!(deromanize("q't "), "ကျွန်တော်");
        assert_eq!(deromanize("q'm "), "ကျွန်မ");
        assert_eq!(deromanize("Q\" "), "ကျွန်ပ်");
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(deromanize("k, K "), "က ခ");
        assert_eq!(deromanize("k,K"), "က ခ");
        assert_eq!(deromanize(",,"), "");
    }

    #[test]
    fn test_stack_comes_back_as_closed_syllable() {
        assert_eq!(deromanize("km Ba "), "ကမ် ဘာ");
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(deromanize("2024"), "2024");
    }

    #[test]
    fn test_collapse_doubled_asat() {
        assert_eq!(insert_final_asat("ကက\u{103A}\u{103A}"), "ကက\u{103A}");
    }

    #[test]
    fn test_error_is_in_band() {
        let long = "k".repeat(settings().limits.max_input_chars + 1);
        let out = deromanize(&long);
        assert!(out.starts_with("Error: "), "{out}");
    }
}
