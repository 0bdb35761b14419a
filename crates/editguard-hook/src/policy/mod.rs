//! Policy layer (protected paths, decision engine).
//!
//! Resolves the fixed protected-path list against the configured base
//! directory once per invocation and evaluates a single request against it.

pub mod engine;
pub mod protected;

pub use engine::{Guard, MutatingTool};
pub use protected::ProtectedSet;
