//! Diagnostic tracing for the CLI.
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr so it never mixes
//! with the tape and verdict printed on stdout.
//!
//! # Example
//! ```bash
//! RUST_LOG=locator=debug locator-cli Y11X00Y
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
