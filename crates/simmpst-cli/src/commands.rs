use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::process;

use simmpst::{settings, BurmeseConverter, GlyphMap, SegmentMode};

use crate::cli::Command;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Apply a custom settings file before anything reads the settings.
pub fn load_settings(path: &str) {
    let content = die!(fs::read_to_string(path), "Error reading settings: {}");
    die!(settings::init_custom(content), "Error in settings: {}");
}

/// Run `f` on `text`, or on each stdin line when `text` is absent.
fn for_each_input(text: Option<String>, mut f: impl FnMut(&str)) {
    match text {
        Some(t) => f(&t),
        None => {
            for line in io::stdin().lock().lines() {
                let line = die!(line, "Error reading stdin: {}");
                f(&line);
            }
        }
    }
}

fn converter(glyph_map: Option<&str>) -> BurmeseConverter {
    match glyph_map {
        Some(path) => BurmeseConverter::new(die!(
            GlyphMap::open(Path::new(path)),
            "Error loading glyph map: {}"
        )),
        None => BurmeseConverter::with_default_map(),
    }
}

pub fn run(command: Command) {
    match command {
        Command::Zaw2uni { text, glyph_map } => {
            let conv = converter(glyph_map.as_deref());
            for_each_input(text, |t| {
                println!("{}", die!(conv.zawgyi_to_unicode(t), "Error: {}"));
            });
        }
        Command::Segment { text, with_virama } => {
            let conv = converter(None);
            let mode = if with_virama {
                SegmentMode::WithVirama
            } else {
                SegmentMode::WithoutVirama
            };
            for_each_input(text, |t| {
                println!("{}", die!(conv.syllable_tokenization(mode, t), "Error: {}"));
            });
        }
        Command::Romanize { text } => {
            let conv = converter(None);
            for_each_input(text, |t| {
                println!("{}", die!(conv.romanize(t), "Error: {}"));
            });
        }
        Command::Deromanize { text } => {
            let conv = converter(None);
            for_each_input(text, |t| println!("{}", conv.deromanize(t)));
        }
        Command::Roundtrip { text } => {
            let conv = converter(None);
            for_each_input(text, |t| {
                let roman = die!(conv.romanize(t), "Error: {}");
                println!("{t}\t{}\t{}", roman.trim_end(), conv.deromanize(&roman));
            });
        }
    }
}
