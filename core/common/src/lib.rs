//! Common types shared across SealStream crates.
//!
//! This crate provides the error taxonomy surfaced to callers and the
//! zeroizing byte buffer used to carry passphrases into the engine.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::SecretBytes;
