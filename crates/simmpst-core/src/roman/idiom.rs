/// A whole-syllable rule applied before generic substitution.
///
/// `segmented` is matched against syllable-separated text, so it carries
/// the separators the segmenter inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Idiom {
    pub segmented: &'static str,
    pub roman: &'static str,
    /// Written form restored by the De-romanizer, if the token is not
    /// shared with the generic table.
    pub restored: Option<&'static str>,
}

/// Applied in order.
pub const IDIOMS: [Idiom; 4] = [
    // "I" (female speaker)
    Idiom {
        segmented: "ကျွန် မ ",
        roman: "q'm ",
        restored: Some("ကျွန်မ"),
    },
    // "I" (male speaker)
    Idiom {
        segmented: "ကျွန် တော် ",
        roman: "q't ",
        restored: Some("ကျွန်တော်"),
    },
    // "we"
    Idiom {
        segmented: "ကျွန်ပ် ",
        roman: "Q\" ",
        restored: Some("ကျွန်ပ်"),
    },
    // ဏ္ဍ stack; shares the kinzi token, told apart by what follows it
    Idiom {
        segmented: "ဏ် ဍ",
        roman: "F",
        restored: None,
    },
];

pub(super) fn apply_idioms(text: &str) -> String {
    IDIOMS
        .iter()
        .fold(text.to_string(), |acc, idiom| {
            acc.replace(idiom.segmented, idiom.roman)
        })
}

/// Written form for a De-romanizer token that is a whole idiom.
pub(super) fn restore_idiom(token: &str) -> Option<&'static str> {
    IDIOMS
        .iter()
        .find(|idiom| idiom.roman.trim_end() == token)
        .and_then(|idiom| idiom.restored)
}
