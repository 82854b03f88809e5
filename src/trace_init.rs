//! Opt-in JSON trace log for the conversion pipeline.

use std::path::Path;

/// File created inside the directory given to [`init_tracing`].
pub const TRACE_FILE: &str = "simmpst-trace.jsonl";

#[cfg(feature = "trace")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Write `simmpst_core` debug events to `<log_dir>/simmpst-trace.jsonl`.
///
/// Only the first call installs the subscriber. `RUST_LOG` overrides the
/// filter. Without the `trace` feature this does nothing.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use tracing_subscriber::EnvFilter;

    INIT.call_once(|| {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(log_dir, TRACE_FILE));
        // keep the writer flushing until exit
        std::mem::forget(guard);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simmpst_core=debug"));
        tracing_subscriber::fmt()
            .json()
            .flatten_event(true)
            .with_writer(writer)
            .with_env_filter(filter)
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}
