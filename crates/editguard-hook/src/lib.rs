//! editguard hook library entry.
//!
//! Wires environment config, the protected-path policy, and the stdin/stdout
//! hook exchange. Consumed by the binary (`main.rs`) and integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod exchange;
pub mod policy;
