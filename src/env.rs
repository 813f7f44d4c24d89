//! Process environment lookups.
//!
//! The binary reads the real environment; unit tests hand the logging setup
//! a fixed map instead of mutating process state.

use std::collections::HashMap;
use std::env::VarError;

/// Source of environment variables.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn mock<K: Into<String>, V: Into<String>>(vars: impl IntoIterator<Item = (K, V)>) -> Self {
        let fixed = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fixed: Some(fixed) }
    }

    pub fn var(&self, name: &str) -> Result<String, VarError> {
        let Some(fixed) = &self.fixed else {
            return std::env::var(name);
        };
        fixed.get(name).cloned().ok_or(VarError::NotPresent)
    }

    /// Trimmed value of `name`; unset and whitespace-only count as absent.
    pub fn non_empty(&self, name: &str) -> Option<String> {
        let value = self.var(name).ok()?;
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
