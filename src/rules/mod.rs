//! Difficulty policy.
//!
//! Maps named levels to configurations and corrects user overrides
//! before they reach a session.

pub mod difficulty;

pub use difficulty::{clamp_overrides, resolve, Difficulty};
