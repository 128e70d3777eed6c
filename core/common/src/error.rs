//! Common error types for SealStream.

use thiserror::Error;

/// Top-level error type for SealStream operations.
///
/// These kinds are the only information surfaced to callers; mapping
/// them to exit codes or diagnostics is entirely a caller concern.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid key size, chunk size, or KDF parameters. Fatal at
    /// construction, never retried.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or unsupported stream header. Raised before any
    /// output is produced.
    #[error("Format error: {0}")]
    Format(String),

    /// A chunk or sentinel tag did not verify. Wrong passphrase and
    /// tampered data are indistinguishable on purpose, so this
    /// variant carries no detail.
    #[error("Authentication failed")]
    Authentication,

    /// Input ended before the sentinel chunk was verified.
    #[error("Stream truncated before completion")]
    Truncated,

    /// Underlying read or write failure, propagated unmodified.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
