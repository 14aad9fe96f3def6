//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout stays clean for SSML output. `RUST_LOG`
//! overrides the level derived from `-q`/`-v` and the config file.

use tracing_subscriber::EnvFilter;

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG`, when set, wins over everything else.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global tracing subscriber.
pub fn init(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
