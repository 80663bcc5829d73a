//! Log output for the calculator.
//!
//! Events go to stderr through a `tracing_subscriber` fmt layer. The level
//! is fixed at `INFO`; nothing is read from the environment.

use tracing::Level;

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Install the global subscriber with an explicit max level.
pub fn init_with_level(level: Level) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%level, "logging initialised");
    }
}
