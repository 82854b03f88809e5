const SETTINGS: &str = "src/default_settings.toml";
const TABLES: [&str; 2] = [
    "src/glyph_map/default_glyph_map.toml",
    "src/roman/default_roman.toml",
];

fn main() {
    parse(SETTINGS, include_str!("src/default_settings.toml"));
    check_table(TABLES[0], include_str!("src/glyph_map/default_glyph_map.toml"));
    check_table(TABLES[1], include_str!("src/roman/default_roman.toml"));
}

fn parse(path: &str, content: &str) -> toml::Table {
    content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("{path}: {e}"))
}

/// Mapping tables need `version = 1` and a non-empty `[mappings]`.
fn check_table(path: &str, content: &str) {
    let table = parse(path, content);
    if table.get("version").and_then(|v| v.as_integer()) != Some(1) {
        panic!("{path}: expected version = 1");
    }
    match table.get("mappings").and_then(|m| m.as_table()) {
        Some(m) if !m.is_empty() => {}
        _ => panic!("{path}: missing or empty [mappings]"),
    }
}
