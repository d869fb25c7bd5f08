//! Tracing initialization

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels, e.g. `CSC_LOG=csc_combinations=debug`
pub const LOG_ENV: &str = "CSC_LOG";

/// Install the stderr subscriber.
///
/// `CSC_LOG` takes precedence; otherwise the CSC crates log at `info`, or
/// `debug` when `verbose` is set. Calling this more than once has no effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "csc={level},csc_annotations={level},csc_combinations={level},csc_report={level}"
            ))
        });

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(verbose),
            )
            .with(filter)
            .init();
    });
}
