//! Burmese ↔ Roman transliteration.
//!
//! The Burmese→Roman table is authoritative; the reverse direction uses
//! its structural inverse plus a few corrective rewrites and is lossy
//! where several Burmese spellings share one Roman token.

mod deromanize;
mod idiom;
mod romanize;
mod tables;

pub use deromanize::deromanize;
pub use idiom::{Idiom, IDIOMS};
pub use romanize::romanize;
pub use tables::{
    parse_roman_toml, token_uses, RomanTables, DEFAULT_ROMAN_TOML, TAGGED_FINAL,
};
