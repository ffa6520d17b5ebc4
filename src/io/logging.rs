//! Diagnostic logging setup

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive used when `RUST_LOG` is not set
pub const fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "noisemosaic=error";
    }
    match verbosity {
        0 => "noisemosaic=warn",
        1 => "noisemosaic=info",
        2 => "noisemosaic=debug",
        _ => "noisemosaic=trace",
    }
}

/// Install the global subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more
/// than once keeps the first subscriber.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity, quiet)));

    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}
