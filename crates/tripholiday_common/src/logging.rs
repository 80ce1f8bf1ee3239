//! Logging utilities for the Trip Holiday backend.
//!
//! Every binary calls [`init`] once at startup. Crates log through the
//! `tracing` macros directly; the helpers here cover the two recurring
//! patterns of logging an error with context and logging a result.

use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO.
///
/// # Examples
///
/// ```
/// use tripholiday_common::logging;
///
/// logging::init();
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` is honoured; the `tripholiday` crates get `level` and the
/// `tower_http` request traces get INFO unless overridden there.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for directive in [format!("tripholiday={}", level), "tower_http=info".to_string()] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }

    // try_init: tests and the seed binary may initialise more than once
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Log an error with context at the ERROR level.
pub fn log_error<E: std::fmt::Display>(error: E, context: &str) {
    error!("{}: {}", context, error);
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_result_passes_value_through() {
        init();
        let ok: Result<u32, String> = log_result(Ok(7), "worked", "failed");
        assert_eq!(ok, Ok(7));
        let err: Result<u32, String> = log_result(Err("nope".into()), "worked", "failed");
        assert_eq!(err, Err("nope".to_string()));
    }
}
