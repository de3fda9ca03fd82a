//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags, e.g. `XQSTUB_LOG=xqstub_lib=trace`.
pub const LOG_ENV: &str = "XQSTUB_LOG";

/// Maps the number of `-v` flags to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
