//! Log output for the CLI.
//!
//! `PARAMGRAPH_LOG` takes an `EnvFilter` directive string and wins over `-v`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PARAMGRAPH_LOG";

/// Default filter for a `-v` count.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
