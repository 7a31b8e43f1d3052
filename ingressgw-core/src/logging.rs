use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging on stderr with `RUST_LOG` filtering (default "info").
///
/// Stdout carries the synthesized graph, so log lines never go there.
/// Output is JSON when stderr is not a terminal and human-readable otherwise.
pub fn init_logging() {
    init_with_mode(default_log_mode());
}

pub fn init_with_mode(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = match mode {
        LogMode::Raw => builder.json().flatten_event(true).try_init(),
        LogMode::Pretty => builder.with_target(false).compact().try_init(),
    };
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Raw,
    Pretty,
}
