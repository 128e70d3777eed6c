//! AES-CTR keystream engine.
//!
//! Counter mode turns AES into a stream cipher: successive counter
//! blocks are encrypted and XORed with the data, so the same
//! operation serves encryption and decryption. Chunk `i` consumes the
//! keystream starting at byte offset `i × chunk_size`, giving every
//! chunk a disjoint counter range under one `(key, nonce)` pair.

use aes::{Aes128, Aes192, Aes256};
use ctr::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use ctr::Ctr128BE;

use sealstream_common::{Error, Result};

use crate::keys::Nonce;

/// AES block width in bytes. Chunk sizes must be a multiple of this
/// so chunk counter ranges never overlap.
pub const BLOCK_SIZE: usize = 16;

/// Keystream generator over one `(cipher key, nonce)` pair.
///
/// The variant is selected by the derived key width; the nonce is the
/// full 16-byte initial counter block, incremented big-endian.
pub enum StreamCipherEngine {
    Aes128(Ctr128BE<Aes128>),
    Aes192(Ctr128BE<Aes192>),
    Aes256(Ctr128BE<Aes256>),
}

impl StreamCipherEngine {
    /// Build an engine for the given cipher key and nonce.
    ///
    /// # Errors
    /// - Returns `Config` if the key is not 16, 24, or 32 bytes
    pub fn new(cipher_key: &[u8], nonce: &Nonce) -> Result<Self> {
        let iv = nonce.as_bytes();
        match cipher_key.len() {
            16 => Ok(StreamCipherEngine::Aes128(init(cipher_key, iv)?)),
            24 => Ok(StreamCipherEngine::Aes192(init(cipher_key, iv)?)),
            32 => Ok(StreamCipherEngine::Aes256(init(cipher_key, iv)?)),
            other => Err(Error::Config(format!(
                "Invalid cipher key length: {} bytes",
                other
            ))),
        }
    }

    /// XOR the keystream starting at byte `offset` into `buf`.
    ///
    /// Identical for encryption and decryption. Seeking makes the
    /// per-chunk counter ranges explicit: callers pass
    /// `chunk_index × chunk_size` and chunks stay logically
    /// independent.
    pub fn apply_keystream_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<()> {
        match self {
            StreamCipherEngine::Aes128(c) => seek_xor(c, offset, buf),
            StreamCipherEngine::Aes192(c) => seek_xor(c, offset, buf),
            StreamCipherEngine::Aes256(c) => seek_xor(c, offset, buf),
        }
    }
}

fn init<C: KeyIvInit>(key: &[u8], iv: &[u8]) -> Result<C> {
    C::new_from_slices(key, iv)
        .map_err(|e| Error::Config(format!("Cipher initialization failed: {}", e)))
}

fn seek_xor<C>(cipher: &mut C, offset: u64, buf: &mut [u8]) -> Result<()>
where
    C: StreamCipher + StreamCipherSeek,
{
    cipher
        .try_seek(offset)
        .map_err(|_| Error::Config("CTR counter range exhausted".to_string()))?;
    cipher
        .try_apply_keystream(buf)
        .map_err(|_| Error::Config("CTR counter range exhausted".to_string()))?;
    Ok(())
}
