use std::path::Path;

use clap::Parser;

use simmpst_cli::cli::Cli;
use simmpst_cli::commands;

fn main() {
    // No-op unless built with the `trace` feature.
    if let Ok(dir) = std::env::var("MMTOOL_TRACE_DIR") {
        simmpst::init_tracing(Path::new(&dir));
    }

    let cli = Cli::parse();
    if let Some(path) = cli.settings.as_deref() {
        commands::load_settings(path);
    }
    commands::run(cli.command);
}
