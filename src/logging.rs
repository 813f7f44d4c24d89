//! Diagnostic logging setup.
//!
//! Logs go to stderr only; stdout is reserved for program output. The
//! filter is read from `HELLO_WORLD_LOG` using `tracing-subscriber`'s
//! directive syntax (e.g. `debug` or `calculator=trace`).

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, ENV_LOG};
use crate::env::Env;

/// Error installing the global subscriber.
#[derive(Error, Debug)]
#[error("failed to install log subscriber: {0}")]
pub struct LoggingError(String);

/// The filter directive to use, falling back to [`DEFAULT_LOG_FILTER`].
pub fn filter_directive(env: &Env) -> String {
    env.non_empty(ENV_LOG)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Build the filter. An unparseable directive falls back to the default.
pub fn build_filter(env: &Env) -> EnvFilter {
    EnvFilter::try_new(filter_directive(env))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Fails if a global subscriber is already set.
pub fn init(env: &Env) -> Result<(), LoggingError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(env))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError(e.to_string()))
}
