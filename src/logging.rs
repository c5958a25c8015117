//! Console logging setup.
//!
//! The library only emits `tracing` events; binaries and tests decide where
//! they go.

use std::io;

use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, Layer};

/// Routes events at or above `level` to stdout for the current thread.
///
/// Logging stays active until the returned guard is dropped.
pub fn init_stdout_logging(level: LevelFilter) -> DefaultGuard {
    let collector = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(io::stdout)
            .with_target(false)
            .with_filter(level),
    );
    tracing::subscriber::set_default(collector)
}
