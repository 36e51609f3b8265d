//! Log subscriber setup for the CLI.
//!
//! Logs go to stderr so stdout only carries the report and saved paths.
//! `RUST_LOG` overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for the given verbosity
pub fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        "pdfcorpus=warn,pdfcorpus_core=warn"
    } else {
        "pdfcorpus=info,pdfcorpus_core=info"
    }
}

/// Install the global subscriber. Call once, before any logging.
pub fn init(quiet: bool) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(quiet).into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
