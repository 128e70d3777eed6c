//! Common types used throughout SealStream.

use std::fmt;
use zeroize::Zeroize;

/// Sensitive byte buffer that zeroizes on drop.
///
/// Used to hand a passphrase to the engine. The buffer is exclusively
/// owned; callers needing the same passphrase for two concurrent
/// operations must take independent copies.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Wrap sensitive bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Get a reference to the inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get the length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zeroize the buffer in place, leaving it empty.
    ///
    /// # Postconditions
    /// - The previous contents are overwritten before release
    /// - `is_empty()` returns true afterwards
    pub fn clear(&mut self) {
        self.0.zeroize();
    }
}

impl From<Vec<u8>> for SecretBytes {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<String> for SecretBytes {
    fn from(s: String) -> Self {
        Self::new(s.into_bytes())
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes([REDACTED; {} bytes])", self.0.len())
    }
}
