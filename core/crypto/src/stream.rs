//! Streaming authenticated encryption over byte sources and sinks.
//!
//! Handles input of any length in bounded memory: one record buffer,
//! no whole-message buffering.
//!
//! Wire format (big-endian, fixed-width fields):
//! ```text
//! Header  : version(1) salt(16) nonce(16)
//! Chunk   : ciphertext(<= chunk_size bytes) tag(32)
//! Sentinel: ciphertext(0 bytes) tag(32)
//! ```
//!
//! Every chunk is encrypted with a disjoint AES-CTR counter range and
//! authenticated by an HMAC tag binding the header and the chunk
//! index. The final sentinel record has empty ciphertext; verifying
//! it is the only proof that the stream was not truncated.

use std::io::{self, Read, Write};

use sealstream_common::{Error, Result, SecretBytes};

use crate::auth::{Authenticator, TAG_SIZE};
use crate::cipher::{StreamCipherEngine, BLOCK_SIZE};
use crate::kdf::{derive_keys, KdfAlgorithm, KdfConfig};
use crate::keys::{KeySize, Nonce, Salt, NONCE_SIZE, SALT_SIZE};

/// Default chunk size for streaming encryption (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Header size: version (1) + salt (16) + nonce (16).
pub const HEADER_SIZE: usize = 1 + SALT_SIZE + NONCE_SIZE;

/// Stream header. The version byte selects the KDF; salt and nonce
/// are public values generated fresh for every encryption.
#[derive(Debug, Clone)]
pub struct Header {
    pub algorithm: KdfAlgorithm,
    pub salt: Salt,
    pub nonce: Nonce,
}

impl Header {
    /// Build a header with fresh random salt and nonce.
    fn generate(algorithm: KdfAlgorithm) -> Self {
        Self {
            algorithm,
            salt: Salt::generate(),
            nonce: Nonce::generate(),
        }
    }

    /// Serialize to wire bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[0] = self.algorithm.version();
        buf[1..1 + SALT_SIZE].copy_from_slice(self.salt.as_bytes());
        buf[1 + SALT_SIZE..].copy_from_slice(self.nonce.as_bytes());
        buf
    }

    /// Parse wire bytes.
    ///
    /// # Errors
    /// - Returns `Format` for an unknown version byte
    pub fn parse(buf: &[u8; HEADER_SIZE]) -> Result<Self> {
        let algorithm = KdfAlgorithm::from_version(buf[0])?;
        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&buf[1..1 + SALT_SIZE]);
        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&buf[1 + SALT_SIZE..]);
        Ok(Self {
            algorithm,
            salt: Salt::from_bytes(salt),
            nonce: Nonce::from_bytes(nonce),
        })
    }
}

/// Configuration for a [`Crypter`].
#[derive(Debug, Clone)]
pub struct CrypterConfig {
    /// Cipher strength; selects AES-128/192/256.
    pub key_size: KeySize,
    /// Plaintext bytes per chunk; must be a non-zero multiple of the
    /// AES block size.
    pub chunk_size: usize,
    /// KDF used when encrypting. Decryption follows the header's
    /// version byte instead.
    pub kdf: KdfAlgorithm,
    /// Cost parameters for both KDFs.
    pub kdf_params: KdfConfig,
}

impl Default for CrypterConfig {
    fn default() -> Self {
        Self {
            key_size: KeySize::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            kdf: KdfAlgorithm::default(),
            kdf_params: KdfConfig::default(),
        }
    }
}

impl CrypterConfig {
    fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 || self.chunk_size % BLOCK_SIZE != 0 {
            return Err(Error::Config(format!(
                "Chunk size must be a non-zero multiple of {} bytes",
                BLOCK_SIZE
            )));
        }
        Ok(())
    }
}

/// Password-based authenticated encryption over a byte source and a
/// byte sink.
///
/// Each operation runs Init, header exchange, chunk streaming, and
/// finalization as one flow of control; any error aborts the
/// operation and derived key material is zeroized on every exit path,
/// including unwinding. The crypter owns its passphrase exclusively;
/// two concurrent operations need independent copies.
#[derive(Debug)]
pub struct Crypter {
    password: SecretBytes,
    config: CrypterConfig,
}

impl Crypter {
    /// Create a crypter for the given passphrase.
    ///
    /// # Errors
    /// - Returns `Config` if the chunk size is invalid
    pub fn new(password: SecretBytes, config: CrypterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { password, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CrypterConfig {
        &self.config
    }

    /// Zeroize the retained passphrase.
    ///
    /// The crypter is unusable for real work afterwards; call this
    /// once no further operations are needed. Dropping the crypter
    /// zeroizes the passphrase as well.
    pub fn reset(&mut self) {
        self.password.clear();
    }

    /// Encrypt `source` into `sink`, returning the number of
    /// plaintext bytes consumed.
    ///
    /// Generates a fresh salt and nonce, writes the header in a
    /// single call, encrypts and tags fixed-size chunks, and appends
    /// the sentinel record. The caller is responsible for flushing or
    /// syncing the sink afterwards.
    pub fn encrypt<R: Read, W: Write>(&self, mut source: R, mut sink: W) -> Result<u64> {
        let chunk_size = self.config.chunk_size;
        let header = Header::generate(self.config.kdf);

        let keys = derive_keys(
            self.config.kdf,
            self.password.as_bytes(),
            &header.salt,
            self.config.key_size,
            &self.config.kdf_params,
        )?;
        let mut engine = StreamCipherEngine::new(keys.cipher_key(), &header.nonce)?;
        let auth = Authenticator::new(keys.mac_key(), &header.to_bytes())?;

        // One write: a reader never observes a partially valid header.
        sink.write_all(&header.to_bytes())?;

        let mut buf = vec![0u8; chunk_size + TAG_SIZE];
        let mut index: u64 = 0;
        let mut total: u64 = 0;

        loop {
            let n = read_full(&mut source, &mut buf[..chunk_size])?;
            if n == 0 {
                break;
            }
            engine.apply_keystream_at(chunk_offset(index, chunk_size)?, &mut buf[..n])?;
            let tag = auth.tag(index, &buf[..n]);
            buf[n..n + TAG_SIZE].copy_from_slice(&tag);
            sink.write_all(&buf[..n + TAG_SIZE])?;
            total += n as u64;
            index += 1;
            if n < chunk_size {
                break;
            }
        }

        // Sentinel: empty ciphertext at index = chunk count.
        sink.write_all(&auth.tag(index, &[]))?;
        Ok(total)
    }

    /// Decrypt `source` into `sink`, returning the number of
    /// plaintext bytes written.
    ///
    /// Every record's tag is verified before its ciphertext is
    /// decrypted or emitted; the first failure aborts the operation
    /// without reading further. Chunks already verified and written
    /// stay written; callers needing all-or-nothing output must stage
    /// it and publish only on success.
    pub fn decrypt<R: Read, W: Write>(&self, mut source: R, mut sink: W) -> Result<u64> {
        let chunk_size = self.config.chunk_size;
        let record_size = chunk_size + TAG_SIZE;

        let mut header_buf = [0u8; HEADER_SIZE];
        if read_full(&mut source, &mut header_buf)? < HEADER_SIZE {
            return Err(Error::Format("Short header".to_string()));
        }
        let header = Header::parse(&header_buf)?;

        let keys = derive_keys(
            header.algorithm,
            self.password.as_bytes(),
            &header.salt,
            self.config.key_size,
            &self.config.kdf_params,
        )?;
        let mut engine = StreamCipherEngine::new(keys.cipher_key(), &header.nonce)?;
        let auth = Authenticator::new(keys.mac_key(), &header.to_bytes())?;

        // Keep TAG_SIZE bytes of lookahead: a record is only a full
        // mid-stream data record when at least a sentinel's worth of
        // input follows it. Without the lookahead a greedy read of
        // record_size bytes could swallow part of the sentinel when
        // the final short chunk is within TAG_SIZE of a full one.
        let cap = record_size + TAG_SIZE;
        let mut buf = vec![0u8; cap];
        let mut have: usize = 0;
        let mut index: u64 = 0;
        let mut total: u64 = 0;

        loop {
            have += read_full(&mut source, &mut buf[have..])?;
            if have < cap {
                // EOF: buf[..have] holds the final records.
                return finish_stream(
                    &auth,
                    &mut engine,
                    &mut sink,
                    chunk_size,
                    index,
                    total,
                    &mut buf[..have],
                );
            }

            let (ct, rest) = buf.split_at_mut(chunk_size);
            auth.verify(index, ct, &rest[..TAG_SIZE])?;
            engine.apply_keystream_at(chunk_offset(index, chunk_size)?, ct)?;
            sink.write_all(ct)?;
            total += chunk_size as u64;
            index += 1;

            buf.copy_within(record_size.., 0);
            have = TAG_SIZE;
        }
    }
}

/// Parse the bytes remaining at end of input: the final data record
/// (if any) plus the sentinel.
///
/// Distinguishes a truncated stream (the records that did arrive
/// authenticate, but the sentinel is missing or short) from tampering
/// (a complete record's tag mismatched). An honest tail is either the
/// bare sentinel or one short data record plus the sentinel.
fn finish_stream<W: Write>(
    auth: &Authenticator,
    engine: &mut StreamCipherEngine,
    sink: &mut W,
    chunk_size: usize,
    index: u64,
    total: u64,
    tail: &mut [u8],
) -> Result<u64> {
    let n = tail.len();
    if n < TAG_SIZE {
        // Not even a sentinel's worth of input arrived.
        return Err(Error::Truncated);
    }

    if n == TAG_SIZE {
        // Bare sentinel: empty ciphertext at the current index.
        auth.verify(index, &[], tail)?;
        return Ok(total);
    }

    if n <= 2 * TAG_SIZE {
        // Longer than a bare sentinel yet too short for any data
        // record plus sentinel: trailing bytes were dropped.
        return Err(Error::Truncated);
    }

    // Complete stream: final data record followed by the sentinel.
    let ct_len = n - 2 * TAG_SIZE;
    if auth
        .verify(index, &tail[..ct_len], &tail[ct_len..ct_len + TAG_SIZE])
        .is_ok()
    {
        auth.verify(index + 1, &[], &tail[n - TAG_SIZE..])?;
        engine.apply_keystream_at(chunk_offset(index, chunk_size)?, &mut tail[..ct_len])?;
        sink.write_all(&tail[..ct_len])?;
        return Ok(total + ct_len as u64);
    }

    // A complete final data record whose sentinel was wholly or
    // partially dropped: its ciphertext must end within TAG_SIZE
    // bytes of the end of input.
    let hi = (n - TAG_SIZE).min(chunk_size);
    let lo = n.saturating_sub(2 * TAG_SIZE - 1).max(1);
    for ct_len in lo..=hi {
        if auth
            .verify(index, &tail[..ct_len], &tail[ct_len..ct_len + TAG_SIZE])
            .is_ok()
        {
            return Err(Error::Truncated);
        }
    }

    Err(Error::Authentication)
}

/// Keystream byte offset for a chunk: disjoint counter ranges per
/// chunk under one key/nonce pair.
fn chunk_offset(index: u64, chunk_size: usize) -> Result<u64> {
    index
        .checked_mul(chunk_size as u64)
        .ok_or_else(|| Error::Config("Chunk counter overflow".to_string()))
}

/// Read until `buf` is full or the source reaches EOF, returning the
/// number of bytes read.
fn read_full<R: Read>(source: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::{Argon2Params, Pbkdf2Params};
    use proptest::prelude::*;
    use std::fs::File;
    use std::io::{Read as _, Write as _};

    fn cheap_params() -> KdfConfig {
        KdfConfig {
            pbkdf2: Pbkdf2Params { iterations: 2 },
            argon2: Argon2Params {
                memory_cost: 8,
                time_cost: 1,
                parallelism: 1,
            },
        }
    }

    fn cheap_config(chunk_size: usize) -> CrypterConfig {
        CrypterConfig {
            chunk_size,
            kdf_params: cheap_params(),
            ..CrypterConfig::default()
        }
    }

    fn crypter(password: &[u8], chunk_size: usize) -> Crypter {
        Crypter::new(SecretBytes::new(password.to_vec()), cheap_config(chunk_size)).unwrap()
    }

    fn encrypt(c: &Crypter, plaintext: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        c.encrypt(plaintext, &mut out).unwrap();
        out
    }

    fn decrypt(c: &Crypter, stream: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        c.decrypt(stream, &mut out)?;
        Ok(out)
    }

    #[test]
    fn test_roundtrip_boundary_sizes() {
        let c = crypter(b"passphrase", 64);
        // 32 = chunk_size - TAG_SIZE lands the final record exactly on
        // a record boundary; 97 and 100 leave a final chunk within
        // TAG_SIZE of a full one, where naive framing would misread
        // part of the sentinel as record data.
        for size in [0usize, 1, 32, 63, 64, 65, 96, 97, 100, 128, 199] {
            let plaintext: Vec<u8> = (0..size).map(|i| i as u8).collect();
            let stream = encrypt(&c, &plaintext);
            assert_eq!(decrypt(&c, &stream).unwrap(), plaintext, "size {}", size);
        }
    }

    #[test]
    fn test_roundtrip_memory_hard() {
        let config = CrypterConfig {
            kdf: KdfAlgorithm::MemoryHard,
            ..cheap_config(64)
        };
        let c = Crypter::new(SecretBytes::new(b"pw".to_vec()), config).unwrap();

        let plaintext = vec![0xC3u8; 150];
        let stream = encrypt(&c, &plaintext);
        assert_eq!(stream[0], 2);
        assert_eq!(decrypt(&c, &stream).unwrap(), plaintext);
    }

    #[test]
    fn test_roundtrip_all_key_sizes() {
        for key_size in [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256] {
            let config = CrypterConfig {
                key_size,
                ..cheap_config(64)
            };
            let c = Crypter::new(SecretBytes::new(b"pw".to_vec()), config).unwrap();
            let plaintext = b"sized to cross one chunk boundary at sixty-four bytes, plus change";
            let stream = encrypt(&c, plaintext);
            assert_eq!(decrypt(&c, &stream).unwrap(), plaintext);
        }
    }

    #[test]
    fn test_empty_input_is_header_plus_sentinel() {
        let c = crypter(b"pw", 64);
        let stream = encrypt(&c, b"");
        assert_eq!(stream.len(), HEADER_SIZE + TAG_SIZE);
        assert_eq!(decrypt(&c, &stream).unwrap(), b"");
    }

    #[test]
    fn test_two_chunk_layout_at_default_chunk_size() {
        let c = crypter(b"pw", DEFAULT_CHUNK_SIZE);
        let plaintext = vec![0xABu8; 100_000];
        let stream = encrypt(&c, &plaintext);

        // Two data records (65536 and 34464 bytes of ciphertext) plus
        // the sentinel.
        let expected =
            HEADER_SIZE + (65536 + TAG_SIZE) + (34464 + TAG_SIZE) + TAG_SIZE;
        assert_eq!(stream.len(), expected);
        assert_eq!(decrypt(&c, &stream).unwrap(), plaintext);
    }

    #[test]
    fn test_byte_counts_returned() {
        let c = crypter(b"pw", 64);
        let plaintext = vec![1u8; 150];

        let mut stream = Vec::new();
        assert_eq!(c.encrypt(&plaintext[..], &mut stream).unwrap(), 150);

        let mut out = Vec::new();
        assert_eq!(c.decrypt(&stream[..], &mut out).unwrap(), 150);
    }

    #[test]
    fn test_ciphertext_nondeterminism() {
        let c = crypter(b"pw", 64);
        let plaintext = vec![7u8; 100];

        let s1 = encrypt(&c, &plaintext);
        let s2 = encrypt(&c, &plaintext);

        assert_ne!(s1[1..1 + SALT_SIZE], s2[1..1 + SALT_SIZE]);
        assert_ne!(s1[HEADER_SIZE..], s2[HEADER_SIZE..]);
        assert_eq!(decrypt(&c, &s1).unwrap(), plaintext);
        assert_eq!(decrypt(&c, &s2).unwrap(), plaintext);
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let c = crypter(b"correct horse", 64);
        let stream = encrypt(&c, b"battery staple");

        let wrong = crypter(b"correct h0rse", 64);
        assert!(matches!(decrypt(&wrong, &stream), Err(Error::Authentication)));

        // Empty stream body as well: header plus sentinel only.
        let stream = encrypt(&c, b"");
        assert!(matches!(decrypt(&wrong, &stream), Err(Error::Authentication)));
    }

    #[test]
    fn test_single_bit_tamper_fails_authentication() {
        let c = crypter(b"pw", 64);
        let plaintext: Vec<u8> = (0..100).map(|i| i as u8).collect();
        let stream = encrypt(&c, &plaintext);
        assert_eq!(stream.len(), 229);

        // Salt, nonce, first chunk ciphertext, first chunk tag,
        // second chunk ciphertext, sentinel tag.
        for pos in [1, 20, 35, 102, 131, 228] {
            let mut bad = stream.clone();
            bad[pos] ^= 0x01;
            let result = decrypt(&c, &bad);
            assert!(
                matches!(result, Err(Error::Authentication)),
                "bit flip at byte {} not caught",
                pos
            );
        }
    }

    #[test]
    fn test_version_flip_between_kdfs_fails_authentication() {
        let c = crypter(b"pw", 64);
        let mut stream = encrypt(&c, b"data");
        stream[0] = 2;
        assert!(matches!(decrypt(&c, &stream), Err(Error::Authentication)));
    }

    #[test]
    fn test_unknown_version_is_format_error() {
        let c = crypter(b"pw", 64);
        let mut stream = encrypt(&c, b"data");
        stream[0] = 9;
        assert!(matches!(decrypt(&c, &stream), Err(Error::Format(_))));
    }

    #[test]
    fn test_short_header_is_format_error() {
        let c = crypter(b"pw", 64);
        assert!(matches!(decrypt(&c, &[]), Err(Error::Format(_))));
        assert!(matches!(decrypt(&c, &[1u8; 10]), Err(Error::Format(_))));
    }

    #[test]
    fn test_dropped_sentinel_is_truncation() {
        let c = crypter(b"pw", 64);
        let plaintext = vec![5u8; 100];
        let stream = encrypt(&c, &plaintext);

        // Drop the whole sentinel record, part of it, or enough to
        // destroy the final data record's tag as well (cuts of 36 and
        // 40 leave a tail too short for any record-plus-sentinel
        // ending).
        for cut in [40, 36, TAG_SIZE, 31, 10, 1] {
            let short = &stream[..stream.len() - cut];
            assert!(
                matches!(decrypt(&c, short), Err(Error::Truncated)),
                "cut of {} bytes not reported as truncation",
                cut
            );
        }
    }

    #[test]
    fn test_dropped_trailing_records_are_truncation() {
        let c = crypter(b"pw", 64);
        let plaintext = vec![5u8; 100];
        let stream = encrypt(&c, &plaintext);

        // Drop the final data record and the sentinel, leaving the
        // header and one full record.
        let short = &stream[..HEADER_SIZE + 64 + TAG_SIZE];
        assert!(matches!(decrypt(&c, short), Err(Error::Truncated)));

        // Header only.
        let short = &stream[..HEADER_SIZE];
        assert!(matches!(decrypt(&c, short), Err(Error::Truncated)));
    }

    #[test]
    fn test_dropped_sentinel_after_full_final_chunk() {
        let c = crypter(b"pw", 64);
        let plaintext = vec![9u8; 128];
        let stream = encrypt(&c, &plaintext);

        let short = &stream[..stream.len() - TAG_SIZE];
        assert!(matches!(decrypt(&c, short), Err(Error::Truncated)));
    }

    #[test]
    fn test_decrypt_stops_at_first_bad_chunk() {
        let c = crypter(b"pw", 64);
        let plaintext: Vec<u8> = (0..160).map(|i| i as u8).collect();
        let mut stream = encrypt(&c, &plaintext);

        // Corrupt the second chunk's ciphertext.
        stream[HEADER_SIZE + 64 + TAG_SIZE + 3] ^= 0xFF;

        let mut out = Vec::new();
        let result = c.decrypt(&stream[..], &mut out);
        assert!(matches!(result, Err(Error::Authentication)));

        // The first, verified chunk stays written; nothing after it.
        assert_eq!(out, &plaintext[..64]);
    }

    #[test]
    fn test_kdf_param_mismatch_fails_authentication() {
        let c = crypter(b"pw", 64);
        let stream = encrypt(&c, b"data");

        let mut config = cheap_config(64);
        config.kdf_params.pbkdf2.iterations = 3;
        let other = Crypter::new(SecretBytes::new(b"pw".to_vec()), config).unwrap();
        assert!(matches!(decrypt(&other, &stream), Err(Error::Authentication)));
    }

    #[test]
    fn test_config_validation() {
        let pw = || SecretBytes::new(b"pw".to_vec());
        assert!(Crypter::new(pw(), cheap_config(0)).is_err());
        assert!(Crypter::new(pw(), cheap_config(33)).is_err());
        assert!(Crypter::new(pw(), cheap_config(48)).is_ok());
    }

    #[test]
    fn test_reset_zeroizes_password() {
        let mut c = crypter(b"pw", 64);
        c.reset();
        assert!(c.password.is_empty());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let plain_path = dir.path().join("plain");
        let sealed_path = dir.path().join("sealed");

        let plaintext = vec![0x42u8; 200_000];
        std::fs::write(&plain_path, &plaintext).unwrap();

        let c = crypter(b"file passphrase", DEFAULT_CHUNK_SIZE);
        {
            let source = File::open(&plain_path).unwrap();
            let mut sink = File::create(&sealed_path).unwrap();
            c.encrypt(source, &mut sink).unwrap();
            sink.flush().unwrap();
        }

        let source = File::open(&sealed_path).unwrap();
        let mut out = Vec::new();
        c.decrypt(source, &mut out).unwrap();
        assert_eq!(out, plaintext);
    }

    /// Source that hands out one byte per read call, checking that
    /// framing never depends on read sizes.
    struct TrickleReader<'a>(&'a [u8]);

    impl std::io::Read for TrickleReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_trickling_source_roundtrip() {
        let c = crypter(b"pw", 64);
        let plaintext: Vec<u8> = (0..130).map(|i| i as u8).collect();

        let mut stream = Vec::new();
        c.encrypt(TrickleReader(&plaintext), &mut stream).unwrap();

        let mut out = Vec::new();
        c.decrypt(TrickleReader(&stream), &mut out).unwrap();
        assert_eq!(out, plaintext);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_roundtrip(
            plaintext in proptest::collection::vec(any::<u8>(), 0..300),
            password in proptest::collection::vec(any::<u8>(), 0..16),
        ) {
            let c = crypter(&password, 64);
            let stream = encrypt(&c, &plaintext);
            prop_assert_eq!(decrypt(&c, &stream).unwrap(), plaintext);
        }

        #[test]
        fn prop_wrong_password_never_decrypts(
            plaintext in proptest::collection::vec(any::<u8>(), 0..200),
            password in proptest::collection::vec(any::<u8>(), 1..16),
        ) {
            let c = crypter(&password, 64);
            let stream = encrypt(&c, &plaintext);

            let mut other = password.clone();
            other[0] ^= 0x01;
            let wrong = crypter(&other, 64);
            prop_assert!(matches!(decrypt(&wrong, &stream), Err(Error::Authentication)));
        }
    }
}
