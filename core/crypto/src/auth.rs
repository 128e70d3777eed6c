//! Keyed-hash chunk authentication.
//!
//! Every chunk carries an HMAC-SHA-256 tag over the stream header,
//! the chunk index, and the ciphertext. Binding the header defeats
//! salt/nonce tampering, binding the index defeats reordering and
//! duplication, and tagging ciphertext (never plaintext) lets
//! verification happen before any decryption.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use sealstream_common::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Authentication tag size: the native HMAC-SHA-256 output width.
pub const TAG_SIZE: usize = 32;

/// Computes and verifies per-chunk tags for one stream.
pub struct Authenticator {
    // Keyed and pre-fed with the header bytes; cloned per chunk.
    mac: HmacSha256,
}

impl Authenticator {
    /// Create an authenticator for the given MAC key and serialized
    /// header.
    pub fn new(mac_key: &[u8], header: &[u8]) -> Result<Self> {
        let mut mac = HmacSha256::new_from_slice(mac_key)
            .map_err(|e| Error::Config(format!("Invalid MAC key: {}", e)))?;
        mac.update(header);
        Ok(Self { mac })
    }

    /// Tag over `header ‖ index ‖ ciphertext`.
    pub fn tag(&self, index: u64, ciphertext: &[u8]) -> [u8; TAG_SIZE] {
        let mut mac = self.mac.clone();
        mac.update(&index.to_be_bytes());
        mac.update(ciphertext);
        mac.finalize().into_bytes().into()
    }

    /// Verify a chunk tag in constant time.
    ///
    /// Callers must invoke this before decrypting or emitting the
    /// ciphertext. Failure carries no detail: a wrong password and
    /// tampered data are indistinguishable.
    pub fn verify(&self, index: u64, ciphertext: &[u8], tag: &[u8]) -> Result<()> {
        let expected = self.tag(index, ciphertext);
        if bool::from(expected.as_slice().ct_eq(tag)) {
            Ok(())
        } else {
            Err(Error::Authentication)
        }
    }
}
