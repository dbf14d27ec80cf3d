//! Console diagnostics for the code generation pipeline.
//!
//! Generation runs report progress with short colored status lines
//! (headers, info, success, warning, failure). This crate owns that output
//! and the `tracing` subscriber setup; the generic algorithms never print on
//! their own.

pub mod console;

use std::sync::Once;

pub use console::{printcol, Color, ColorMode, ConsolePrinter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// Does nothing unless `RUST_LOG` holds a valid filter, e.g.
/// `RUST_LOG=lk_support::memo=trace` for cache hits and misses or
/// `RUST_LOG=lk_codegen=debug` for rendered declarations. Status lines from
/// [`printcol`] stay on stdout. Later calls are no-ops, as is a call made
/// after the host installed its own subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);
        // Another global subscriber wins.
        let _ = tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init();
    });
}
