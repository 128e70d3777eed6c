//! Password stretching into cipher and MAC key material.
//!
//! Exactly two algorithms exist, selected by the stream version byte:
//! a fast iterated-hash stretch (PBKDF2-HMAC-SHA-256) and a
//! memory-hard stretch (Argon2id). Both produce `2 × key_size` bytes
//! split into independent cipher and MAC keys. The wire format is a
//! closed, versioned set; there is no open-ended algorithm plugin
//! seam.

use argon2::{Algorithm, Argon2, Params, Version};
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use sealstream_common::{Error, Result};

use crate::keys::{DerivedKeys, KeySize, Salt};

/// Key derivation algorithm, one per stream format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KdfAlgorithm {
    /// PBKDF2-HMAC-SHA-256 (wire version 1).
    Fast,
    /// Argon2id v1.3 (wire version 2).
    MemoryHard,
}

impl KdfAlgorithm {
    /// Wire version byte for this algorithm.
    pub fn version(self) -> u8 {
        match self {
            KdfAlgorithm::Fast => 1,
            KdfAlgorithm::MemoryHard => 2,
        }
    }

    /// Select an algorithm from a header version byte.
    ///
    /// # Errors
    /// - Returns `Format` for unknown versions
    pub fn from_version(version: u8) -> Result<Self> {
        match version {
            1 => Ok(KdfAlgorithm::Fast),
            2 => Ok(KdfAlgorithm::MemoryHard),
            other => Err(Error::Format(format!(
                "Unsupported stream version: {}",
                other
            ))),
        }
    }
}

impl Default for KdfAlgorithm {
    fn default() -> Self {
        KdfAlgorithm::Fast
    }
}

/// Parameters for the fast PBKDF2 stretch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pbkdf2Params {
    /// Number of HMAC iterations.
    pub iterations: u32,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            iterations: 600_000,
        }
    }
}

/// Parameters for the memory-hard Argon2id stretch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Memory cost in KiB (e.g., 65536 = 64 MiB).
    pub memory_cost: u32,
    /// Number of iterations.
    pub time_cost: u32,
    /// Degree of parallelism.
    pub parallelism: u32,
}

impl Argon2Params {
    /// Parameters suitable for interactive use, targeting roughly
    /// half a second of derivation time.
    pub fn interactive() -> Self {
        Self {
            memory_cost: 65536, // 64 MiB
            time_cost: 3,
            parallelism: 4,
        }
    }

    /// Higher-cost parameters for sensitive data; derivation may take
    /// several seconds.
    pub fn sensitive() -> Self {
        Self {
            memory_cost: 262144, // 256 MiB
            time_cost: 4,
            parallelism: 4,
        }
    }

    /// Moderate parameters for constrained devices.
    pub fn moderate() -> Self {
        Self {
            memory_cost: 32768, // 32 MiB
            time_cost: 3,
            parallelism: 2,
        }
    }
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self::interactive()
    }
}

/// Cost parameters for both algorithms.
///
/// These are explicit configuration rather than process-wide state so
/// tests can substitute cheap values. They are not carried on the
/// wire: decrypting with different parameters than the encryptor used
/// fails authentication, and upgrading the defaults requires a format
/// version bump.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KdfConfig {
    pub pbkdf2: Pbkdf2Params,
    pub argon2: Argon2Params,
}

/// Stretch a password and salt into cipher and MAC keys.
///
/// Different salts yield independent, uncorrelated key material; no
/// state is cached across calls.
///
/// # Errors
/// - Returns `Config` if the cost parameters are invalid; derivation
///   failure is fatal and never retried
pub fn derive_keys(
    algorithm: KdfAlgorithm,
    password: &[u8],
    salt: &Salt,
    size: KeySize,
    config: &KdfConfig,
) -> Result<DerivedKeys> {
    let mut stretched = vec![0u8; 2 * size.bytes()];

    match algorithm {
        KdfAlgorithm::Fast => {
            if config.pbkdf2.iterations == 0 {
                return Err(Error::Config(
                    "PBKDF2 iteration count must be non-zero".to_string(),
                ));
            }
            pbkdf2_hmac::<Sha256>(
                password,
                salt.as_bytes(),
                config.pbkdf2.iterations,
                &mut stretched,
            );
        }
        KdfAlgorithm::MemoryHard => {
            let params = Params::new(
                config.argon2.memory_cost,
                config.argon2.time_cost,
                config.argon2.parallelism,
                Some(stretched.len()),
            )
            .map_err(|e| Error::Config(format!("Invalid Argon2 parameters: {}", e)))?;

            Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                .hash_password_into(password, salt.as_bytes(), &mut stretched)
                .map_err(|e| Error::Config(format!("Key derivation failed: {}", e)))?;
        }
    }

    DerivedKeys::split(stretched, size)
}
