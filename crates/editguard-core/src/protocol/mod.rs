//! Hook wire formats (JSON in, JSON out).
//!
//! - `request`: the PreToolUse payload the host writes to stdin.
//! - `response`: the `hookSpecificOutput` document the hook writes to stdout.
//!
//! Decoding is panic-free: anything that does not fit the request shape is
//! reported as `GuardError::MalformedRequest` for the caller to fail open on.

pub mod request;
pub mod response;

/// Event name the guard answers for.
pub const PRE_TOOL_USE: &str = "PreToolUse";
