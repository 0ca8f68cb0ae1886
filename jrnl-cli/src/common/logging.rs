use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Console-only logging to stderr, controlled by `RUST_LOG` (default: `warn`).
/// Colors only when stderr is a terminal.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
