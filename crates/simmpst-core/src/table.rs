//! Ordered key→value substitution tables and their TOML source format.
//!
//! A table is sorted once at construction (longest key first) and then
//! applied with greedy longest-match scanning, so a multi-codepoint key
//! such as the kinzi always wins over its first codepoint.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::ConfigError;

/// Format version understood by [`parse_table_toml`].
pub const TABLE_VERSION: u32 = 1;

#[derive(Deserialize)]
struct TableFile {
    version: u32,
    mappings: BTreeMap<String, String>,
}

/// Parse TOML text into a sorted `BTreeMap<key, value>`.
///
/// Only the shared envelope is checked here (version, non-empty
/// `[mappings]`); each table validates its own keys and values.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, String>, ConfigError> {
    let file: TableFile =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if file.version != TABLE_VERSION {
        return Err(ConfigError::UnsupportedVersion(file.version));
    }
    if file.mappings.is_empty() {
        return Err(ConfigError::Empty);
    }
    Ok(file.mappings)
}

#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    /// Sorted by descending key length (in chars), then by key.
    entries: Vec<(String, String)>,
    /// First char of each key → indices into `entries`, longest first.
    by_first: HashMap<char, Vec<usize>>,
}

impl SubstitutionTable {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut entries: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(k, _)| !k.is_empty())
            .collect();
        entries.sort_by(|a, b| {
            (Reverse(a.0.chars().count()), &a.0).cmp(&(Reverse(b.0.chars().count()), &b.0))
        });
        entries.dedup_by(|a, b| a.0 == b.0);

        let mut by_first: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, (key, _)) in entries.iter().enumerate() {
            if let Some(c) = key.chars().next() {
                by_first.entry(c).or_default().push(i);
            }
        }

        Self { entries, by_first }
    }

    /// Build the value→key table.
    ///
    /// Entries with an empty value cannot be reversed and are skipped. When
    /// several keys share a value, the one sorting last wins, so the
    /// inverse is deterministic but not injective.
    pub fn inverse(&self) -> Self {
        let mut reversed: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in &self.entries {
            if !value.is_empty() {
                reversed.insert(value.clone(), key.clone());
            }
        }
        Self::new(reversed)
    }

    /// Longest entry whose key is a prefix of `text`.
    pub fn longest_match(&self, text: &str) -> Option<(&str, &str)> {
        let first = text.chars().next()?;
        self.by_first.get(&first)?.iter().find_map(|&i| {
            let (key, value) = &self.entries[i];
            text.starts_with(key.as_str())
                .then_some((key.as_str(), value.as_str()))
        })
    }

    /// Replace every key occurrence, scanning left to right with longest
    /// match. Text not covered by any key is copied unchanged.
    pub fn replace_longest(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            match self.longest_match(rest) {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &rest[key.len()..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        out
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Entries in application order (longest key first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
