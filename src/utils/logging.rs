use std::sync::LazyLock;

use crate::errors::{AppError, AppResult};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `verbosity` 0 uses `RUST_LOG` as given, or `warn` for this crate when it is
/// unset or invalid; 1, 2 and 3+ select info, debug and trace for this crate.
pub fn enable_logging(verbosity: u8) -> AppResult<()> {
    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
    let scoped = |level: LevelFilter| EnvFilter::new(format!("{crate_name}={level}"));

    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| scoped(LevelFilter::WARN)),
        1 => scoped(LevelFilter::INFO),
        2 => scoped(LevelFilter::DEBUG),
        _ => scoped(LevelFilter::TRACE),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Other(format!("logging setup failed: {e}")))
}

/// Subscriber for tests; force it once per test binary.
pub static TEST_LOGGING: LazyLock<()> = LazyLock::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
});
