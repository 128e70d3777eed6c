//! Key material types with secure memory handling.
//!
//! Derived key material zeroizes on drop so that cipher and MAC keys
//! never outlive the operation that produced them.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use sealstream_common::{Error, Result};

/// Length of the per-message salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Length of the per-message CTR nonce in bytes.
pub const NONCE_SIZE: usize = 16;

/// Cipher key strength. The byte width selects AES-128, AES-192, or
/// AES-256.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySize {
    Aes128,
    Aes192,
    Aes256,
}

impl KeySize {
    /// Key width in bytes.
    pub fn bytes(self) -> usize {
        match self {
            KeySize::Aes128 => 16,
            KeySize::Aes192 => 24,
            KeySize::Aes256 => 32,
        }
    }

    /// Select a key size from a byte width.
    ///
    /// # Errors
    /// - Returns `Config` for any width other than 16, 24, or 32
    pub fn from_bytes(len: usize) -> Result<Self> {
        match len {
            16 => Ok(KeySize::Aes128),
            24 => Ok(KeySize::Aes192),
            32 => Ok(KeySize::Aes256),
            other => Err(Error::Config(format!(
                "Invalid key size: {} bytes (expected 16, 24, or 32)",
                other
            ))),
        }
    }
}

impl Default for KeySize {
    fn default() -> Self {
        KeySize::Aes256
    }
}

/// Salt for key derivation, freshly generated per encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salt([u8; SALT_SIZE]);

impl Salt {
    /// Generate a random salt from the OS RNG.
    pub fn generate() -> Self {
        let mut salt = [0u8; SALT_SIZE];
        OsRng.fill_bytes(&mut salt);
        Self(salt)
    }

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.0
    }
}

/// Per-message CTR nonce, generated alongside the salt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Generate a random nonce from the OS RNG.
    pub fn generate() -> Self {
        let mut nonce = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce);
        Self(nonce)
    }

    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the nonce bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

/// Cipher key and MAC key derived from one password/salt pair.
///
/// The two halves come from a single stretched buffer and are never
/// derivable from one another. Both zeroize on drop, so key material
/// is cleared on every exit path, including error propagation.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    cipher_key: Vec<u8>,
    mac_key: Vec<u8>,
}

impl DerivedKeys {
    /// Split stretched KDF output into cipher and MAC keys.
    ///
    /// # Preconditions
    /// - `stretched` must be exactly `2 × size.bytes()` long
    pub fn split(mut stretched: Vec<u8>, size: KeySize) -> Result<Self> {
        if stretched.len() != 2 * size.bytes() {
            stretched.zeroize();
            return Err(Error::Config(format!(
                "Stretched key material must be {} bytes",
                2 * size.bytes()
            )));
        }
        let mac_key = stretched.split_off(size.bytes());
        Ok(Self {
            cipher_key: stretched,
            mac_key,
        })
    }

    /// Cipher key half.
    pub fn cipher_key(&self) -> &[u8] {
        &self.cipher_key
    }

    /// MAC key half.
    pub fn mac_key(&self) -> &[u8] {
        &self.mac_key
    }
}

impl fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKeys([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_size_widths() {
        assert_eq!(KeySize::Aes128.bytes(), 16);
        assert_eq!(KeySize::Aes192.bytes(), 24);
        assert_eq!(KeySize::Aes256.bytes(), 32);
    }

    #[test]
    fn test_key_size_from_bytes() {
        assert_eq!(KeySize::from_bytes(16).unwrap(), KeySize::Aes128);
        assert_eq!(KeySize::from_bytes(32).unwrap(), KeySize::Aes256);
        assert!(KeySize::from_bytes(20).is_err());
        assert!(KeySize::from_bytes(0).is_err());
    }

    #[test]
    fn test_salt_generate() {
        let salt1 = Salt::generate();
        let salt2 = Salt::generate();

        // Random salts should be different
        assert_ne!(salt1.as_bytes(), salt2.as_bytes());
    }

    #[test]
    fn test_nonce_generate() {
        let nonce1 = Nonce::generate();
        let nonce2 = Nonce::generate();

        assert_ne!(nonce1.as_bytes(), nonce2.as_bytes());
    }

    #[test]
    fn test_derived_keys_split() {
        let stretched: Vec<u8> = (0..64).collect();
        let keys = DerivedKeys::split(stretched, KeySize::Aes256).unwrap();

        assert_eq!(keys.cipher_key().len(), 32);
        assert_eq!(keys.mac_key().len(), 32);
        assert_eq!(keys.cipher_key()[0], 0);
        assert_eq!(keys.mac_key()[0], 32);
    }

    #[test]
    fn test_derived_keys_split_wrong_length() {
        assert!(DerivedKeys::split(vec![0u8; 63], KeySize::Aes256).is_err());
        assert!(DerivedKeys::split(vec![0u8; 32], KeySize::Aes256).is_err());
    }

    #[test]
    fn test_derived_keys_zeroize() {
        let mut keys = DerivedKeys::split(vec![0xAAu8; 64], KeySize::Aes256).unwrap();
        keys.zeroize();

        assert!(keys.cipher_key().is_empty());
        assert!(keys.mac_key().is_empty());
    }

    #[test]
    fn test_derived_keys_debug_redacted() {
        let keys = DerivedKeys::split(vec![0xAAu8; 64], KeySize::Aes256).unwrap();
        assert!(!format!("{:?}", keys).contains("170"));
    }
}
