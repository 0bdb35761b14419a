//! editguard core: hook wire contracts, the decision type, and errors.
//!
//! This crate defines what the host sends to a PreToolUse hook and what the
//! hook writes back. It carries no I/O and installs no subscriber so the
//! decoding and encoding paths can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! A request that cannot be decoded surfaces as `GuardError`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod error;
pub mod protocol;

pub use decision::Decision;
/// Shared result type.
pub use error::{Result, GuardError};
