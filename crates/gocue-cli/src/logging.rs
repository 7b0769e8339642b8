//! Tracing setup for the binary.
//!
//! Library code only emits events; the filter comes from `GOCUE_LOG`
//! (`EnvFilter` syntax) and defaults to `warn`. Output goes to stderr so it
//! never mixes with rendered source on stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "GOCUE_LOG";
const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("warning: tracing subscriber already initialized");
    }
}
