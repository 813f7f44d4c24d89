//! App-wide constants.
//!
//! Centralises the greeting text and environment variable
//! names so a rename only requires changing this file.

/// The line the hello-world program prints.
pub const GREETING: &str = "Hello, World!";

/// Log filter applied when [`ENV_LOG`] is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG: &str = "HELLO_WORLD_LOG";
