//! Logging Infrastructure
//!
//! `tracing` subscriber setup shared by the HTTP service and the command line.
//! Output goes to stderr so command output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. `RUST_LOG` overrides `default_level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(default_level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
