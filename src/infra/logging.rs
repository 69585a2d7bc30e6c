//! Structured logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "NOTRA_LOG";

/// Returns the filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "notra=warn",
        1 => "notra=debug",
        _ => "notra=trace",
    }
}

/// Initializes the global subscriber, logging to stderr.
///
/// `NOTRA_LOG` takes precedence over the verbosity flag. Calling this more
/// than once returns an error from the second call on.
pub fn init_tracing(verbose: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
