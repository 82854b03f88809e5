use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mmtool", about = "Burmese script conversion tool")]
pub struct Cli {
    /// Path to a settings TOML applied before the first conversion
    #[arg(long, global = true)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert Zawgyi-encoded text to Unicode
    Zaw2uni {
        /// Text to convert (reads stdin line by line when omitted)
        text: Option<String>,
        /// Path to a glyph map TOML (defaults to the embedded Zawgyi map)
        #[arg(long)]
        glyph_map: Option<String>,
    },

    /// Insert a space after every syllable
    Segment {
        /// Text to segment (reads stdin line by line when omitted)
        text: Option<String>,
        /// Restore an explicit asat where stacks are split
        #[arg(long)]
        with_virama: bool,
    },

    /// Romanize Unicode Burmese text
    Romanize {
        /// Text to romanize (reads stdin line by line when omitted)
        text: Option<String>,
    },

    /// Rebuild Burmese text from its romanization
    Deromanize {
        /// Romanized text (reads stdin line by line when omitted)
        text: Option<String>,
    },

    /// Romanize and rebuild, printing both
    Roundtrip {
        /// Text to round-trip (reads stdin line by line when omitted)
        text: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_segment_with_virama() {
        let cli = Cli::try_parse_from(["mmtool", "segment", "ကမ္ဘာ", "--with-virama"]).unwrap();
        match cli.command {
            Command::Segment { text, with_virama } => {
                assert_eq!(text.as_deref(), Some("ကမ္ဘာ"));
                assert!(with_virama);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_zaw2uni_glyph_map() {
        let cli =
            Cli::try_parse_from(["mmtool", "zaw2uni", "--glyph-map", "map.toml"]).unwrap();
        match cli.command {
            Command::Zaw2uni { text, glyph_map } => {
                assert!(text.is_none());
                assert_eq!(glyph_map.as_deref(), Some("map.toml"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_global_settings() {
        let cli = Cli::try_parse_from(["mmtool", "romanize", "--settings", "s.toml", "က"])
            .unwrap();
        assert_eq!(cli.settings.as_deref(), Some("s.toml"));
    }

    #[test]
    fn error_unknown_subcommand() {
        assert!(Cli::try_parse_from(["mmtool", "translate"]).is_err());
    }
}
