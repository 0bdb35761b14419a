//! editguard-hook
//!
//! PreToolUse hook that refuses edits to the project's protected files.
//! - Request: one JSON document on stdin
//! - Response: one JSON document on stdout, always exit 0
//! - Logs go to stderr (`RUST_LOG`, default `warn`)

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use editguard_hook::policy::{protected::PROTECTED_RELATIVE, Guard};
use editguard_hook::{config, exchange};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let cfg = config::load_from_env();
    let guard = Guard::from_config(&cfg);
    tracing::debug!(base_dir = %cfg.base_dir, protected = PROTECTED_RELATIVE.len(), "editguard-hook starting");

    exchange::run(&guard, io::stdin().lock(), io::stdout().lock());
    ExitCode::SUCCESS
}
