//! Guard config loader (environment only).

use std::env::{self, VarError};

/// Variable naming the project root the protected paths hang off.
pub const PROJECT_DIR_VAR: &str = "CLAUDE_PROJECT_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Base directory; empty when the variable is unset.
    pub base_dir: String,
}

pub fn load_from_env() -> GuardConfig {
    load_from_lookup(|key| var_value(key, env::var(key)))
}

/// Load from an arbitrary key lookup. A missing key yields an empty base dir.
pub fn load_from_lookup<F>(lookup: F) -> GuardConfig
where
    F: Fn(&str) -> Option<String>,
{
    GuardConfig {
        base_dir: lookup(PROJECT_DIR_VAR).unwrap_or_default(),
    }
}

/// A non-UTF-8 value is kept lossily so absolute protected paths stay absolute.
fn var_value(key: &str, res: Result<String, VarError>) -> Option<String> {
    match res {
        Ok(v) => Some(v),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            let lossy = raw.to_string_lossy().into_owned();
            tracing::warn!(key, value = %lossy, "environment variable is not valid UTF-8, using lossy value");
            Some(lossy)
        }
    }
}
