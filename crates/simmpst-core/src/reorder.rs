//! Visual → logical reordering of Burmese clusters.
//!
//! Legacy fonts store a cluster in the order its glyphs are drawn: the
//! vowel sign E and medial RA come before the consonant they surround.
//! A cluster is parsed into fixed slots in that visual order and then
//! re-emitted in [`CANONICAL_ORDER`].

use crate::unicode::{
    is_cluster_base, is_stackable, KINZI, MEDIAL_HA, MEDIAL_RA, MEDIAL_WA, MEDIAL_YA, VIRAMA,
    VISARGA, VOWEL_AA, VOWEL_E,
};

/// A position in a cluster. Declaration order is the visual (parse) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    LeadingVowel,
    LeadingMedial,
    Base,
    Wa,
    Ha,
    Ya,
    Kinzi,
    LateWa,
    LateHa,
    Aa,
    Visarga,
    Stack,
}

pub const SLOT_COUNT: usize = 12;

pub const PARSE_ORDER: [Slot; SLOT_COUNT] = [
    Slot::LeadingVowel,
    Slot::LeadingMedial,
    Slot::Base,
    Slot::Wa,
    Slot::Ha,
    Slot::Ya,
    Slot::Kinzi,
    Slot::LateWa,
    Slot::LateHa,
    Slot::Aa,
    Slot::Visarga,
    Slot::Stack,
];

/// Logical order in which slots are written back out.
pub const CANONICAL_ORDER: [Slot; SLOT_COUNT] = [
    Slot::Kinzi,
    Slot::Base,
    Slot::Stack,
    Slot::LeadingMedial,
    Slot::Ya,
    Slot::LateWa,
    Slot::Wa,
    Slot::LateHa,
    Slot::Ha,
    Slot::LeadingVowel,
    Slot::Aa,
    Slot::Visarga,
];

impl Slot {
    /// Length of this slot's capture at the start of `rest`, if it matches.
    fn match_len(self, rest: &[char]) -> Option<usize> {
        let first = *rest.first()?;
        let single = |want: char| (first == want).then_some(1);
        match self {
            Slot::LeadingVowel => single(VOWEL_E),
            Slot::LeadingMedial => single(MEDIAL_RA),
            Slot::Base => is_cluster_base(first).then_some(1),
            Slot::Wa | Slot::LateWa => single(MEDIAL_WA),
            Slot::Ha | Slot::LateHa => single(MEDIAL_HA),
            Slot::Ya => single(MEDIAL_YA),
            Slot::Kinzi => rest.starts_with(&KINZI).then_some(KINZI.len()),
            Slot::Aa => single(VOWEL_AA),
            Slot::Visarga => single(VISARGA),
            Slot::Stack => match rest {
                [VIRAMA, c, ..] if is_stackable(*c) => Some(2),
                _ => None,
            },
        }
    }
}

/// One visual cluster, borrowed from the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster<'a> {
    captures: [Option<&'a [char]>; SLOT_COUNT],
}

impl<'a> Cluster<'a> {
    /// Parse a cluster at the start of `chars`, returning it with the
    /// number of chars consumed.
    ///
    /// Every slot but `Base` is optional and taken greedily. Returns `None`
    /// when no base follows the leading signs; such text is not a cluster.
    pub fn parse(chars: &'a [char]) -> Option<(Self, usize)> {
        let mut captures = [None; SLOT_COUNT];
        let mut pos = 0;
        for slot in PARSE_ORDER {
            match slot.match_len(&chars[pos..]) {
                Some(n) => {
                    captures[slot as usize] = Some(&chars[pos..pos + n]);
                    pos += n;
                }
                None if slot == Slot::Base => return None,
                None => {}
            }
        }
        Some((Self { captures }, pos))
    }

    pub fn get(&self, slot: Slot) -> Option<&'a [char]> {
        self.captures[slot as usize]
    }

    pub fn base(&self) -> char {
        // parse() never builds a cluster without a base
        self.get(Slot::Base).map_or('\0', |b| b[0])
    }

    /// Append the cluster to `out` in canonical order.
    pub fn write_canonical(&self, out: &mut String) {
        for slot in CANONICAL_ORDER {
            if let Some(chars) = self.get(slot) {
                out.extend(chars.iter());
            }
        }
    }
}

/// Rewrite every cluster of `text` into canonical order. Text that does
/// not start a cluster (punctuation, digits, stray signs) is copied as is.
pub fn reorder_clusters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        match Cluster::parse(&chars[i..]) {
            Some((cluster, len)) => {
                cluster.write_canonical(&mut out);
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}
