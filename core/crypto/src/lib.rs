//! Cryptographic engine for SealStream.
//!
//! This module provides:
//! - Password stretching with PBKDF2-HMAC-SHA-256 or Argon2id
//! - AES-CTR stream encryption with per-chunk counter ranges
//! - HMAC-SHA-256 chunk authentication (encrypt-then-MAC)
//! - Streaming encryption of arbitrarily large input in bounded memory
//!
//! # Security Guarantees
//! - All derived key material is automatically zeroized on drop
//! - No plaintext or key material is ever logged
//! - Tags are verified in constant time, before any decryption
//! - Truncated streams are detected via a mandatory sentinel record

pub mod auth;
pub mod cipher;
pub mod kdf;
pub mod keys;
pub mod stream;

pub use auth::{Authenticator, TAG_SIZE};
pub use cipher::{StreamCipherEngine, BLOCK_SIZE};
pub use kdf::{derive_keys, Argon2Params, KdfAlgorithm, KdfConfig, Pbkdf2Params};
pub use keys::{DerivedKeys, KeySize, Nonce, Salt, NONCE_SIZE, SALT_SIZE};
pub use stream::{Crypter, CrypterConfig, Header, DEFAULT_CHUNK_SIZE, HEADER_SIZE};
