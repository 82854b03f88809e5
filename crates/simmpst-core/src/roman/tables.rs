use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use super::idiom::IDIOMS;
use crate::error::ConfigError;
use crate::table::{parse_table_toml, SubstitutionTable};

pub const DEFAULT_ROMAN_TOML: &str = include_str!("default_roman.toml");

/// Token for the vowel-final `ော်`/`ေါ်`, which the generic mapping would
/// render the same as the open `ော`.
pub const TAGGED_FINAL: (&str, &str) = ("oo", "ော်");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Parse and validate a romanization table.
///
/// Keys must be non-empty and contain no whitespace; values may be empty
/// (such entries are dropped from the inverse).
pub fn parse_roman_toml(toml_str: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let map = parse_table_toml(toml_str)?;
    for (key, value) in &map {
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidKey {
                key: key.clone(),
                reason: "keys must be non-empty and contain no whitespace",
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidKey {
                key: key.clone(),
                reason: "tokens must not contain whitespace",
            });
        }
    }
    Ok(map)
}

/// Whether `c` occurs in a token of `map`, an idiom or the tagged final.
pub fn token_uses(map: &BTreeMap<String, String>, c: char) -> bool {
    map.values().any(|token| token.contains(c))
        || IDIOMS.iter().any(|idiom| idiom.roman.contains(c))
        || TAGGED_FINAL.0.contains(c)
}

pub struct RomanTables {
    forward: SubstitutionTable,
    inverse: SubstitutionTable,
}

impl RomanTables {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ConfigError> {
        // Validate eagerly
        parse_roman_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomanTables {
        static INSTANCE: OnceLock<RomanTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_ROMAN_TOML);
            let map = parse_roman_toml(toml_str).expect("romanization TOML must be valid");
            RomanTables::from_map(map)
        })
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        let forward = SubstitutionTable::new(map);
        let inverse = SubstitutionTable::new(forward.inverse().iter().chain([TAGGED_FINAL]).map(
            |(k, v)| (k.to_string(), v.to_string()),
        ));
        debug!(
            forward = forward.len(),
            inverse = inverse.len(),
            "romanization tables built"
        );
        Self { forward, inverse }
    }

    /// Burmese → Roman, longest key first.
    pub fn forward(&self) -> &SubstitutionTable {
        &self.forward
    }

    /// Roman → Burmese, longest token first.
    pub fn inverse(&self) -> &SubstitutionTable {
        &self.inverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let map = parse_roman_toml(DEFAULT_ROMAN_TOML).unwrap();
        assert!(map.len() > 60, "expected 60+ mappings, got {}", map.len());
        assert_eq!(map["က"], "k");
        assert_eq!(map["င်္"], "F");
        assert_eq!(map["်"], "");
    }

    #[test]
    fn forward_prefers_kinzi_over_nga() {
        let t = RomanTables::global();
        assert_eq!(t.forward().longest_match("င်္ဂ"), Some(("င်္", "F")));
        assert_eq!(t.forward().longest_match("င်"), Some(("င", "c")));
    }

    #[test]
    fn inverse_prefers_longer_tokens() {
        let t = RomanTables::global();
        assert_eq!(t.inverse().longest_match("Joo"), Some(("Joo", "ဪ")));
        assert_eq!(t.inverse().longest_match("oo"), Some(("oo", "ော်")));
        assert_eq!(t.inverse().longest_match("txa"), Some(("tx", "ဋ")));
        assert_eq!(t.inverse().longest_match("ii"), Some(("ii", "ီ")));
    }

    #[test]
    fn inverse_resolves_shared_a_to_vowel_sign() {
        let t = RomanTables::global();
        assert_eq!(t.inverse().get("a"), Some("ာ"));
    }

    #[test]
    fn every_forward_token_reverses() {
        let t = RomanTables::global();
        for (burmese, roman) in t.forward().iter() {
            if roman.is_empty() || roman == "a" {
                continue;
            }
            assert_eq!(t.inverse().get(roman), Some(burmese), "token {roman}");
        }
    }

    #[test]
    fn token_chars() {
        let map = parse_roman_toml(DEFAULT_ROMAN_TOML).unwrap();
        assert!(token_uses(&map, '.'));
        assert!(token_uses(&map, '/'));
        assert!(token_uses(&map, '\''));
        assert!(token_uses(&map, '"'));
        assert!(!token_uses(&map, ','));
        assert!(!token_uses(&map, ';'));
    }

    #[test]
    fn error_whitespace_key() {
        let toml = "version = 1\n[mappings]\n\"က ခ\" = \"k\"\n";
        let err = parse_roman_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { .. }));
    }

    #[test]
    fn error_whitespace_token() {
        let toml = "version = 1\n[mappings]\n\"က\" = \"k k\"\n";
        let err = parse_roman_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKey { .. }));
    }
}
