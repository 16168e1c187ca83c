//! Diagnostic logging bootstrap.
//!
//! The library only emits `log` events. Binaries call [`init_logging`] once to
//! route them to stderr. The level comes from `RUST_LOG`, defaulting to `warn`,
//! so diagnostics never mix with regular output unless asked for.

use flexi_logger::{Logger, LoggerHandle};
use std::sync::OnceLock;

const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceLock<Option<LoggerHandle>> = OnceLock::new();

/// Starts the stderr logger. Safe to call repeatedly; only the first call has an effect.
///
/// Returns `false` when the logger could not be started. Logging is never
/// required for a command to work, so callers may ignore the result.
pub fn init_logging() -> bool {
    LOGGER
        .get_or_init(|| {
            Logger::try_with_env_or_str(DEFAULT_LEVEL)
                .and_then(|logger| logger.log_to_stderr().start())
                .ok()
        })
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init_logging();
        let second = init_logging();
        assert_eq!(first, second);
    }
}
