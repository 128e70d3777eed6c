//! SealStream CLI - password-based authenticated stream encryption.
//!
//! Encrypts stdin (or a file) to stdout (or a file); `-d` reverses
//! the direction. The passphrase is prompted for on the terminal, so
//! both ends of a pipeline stay free for data.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use zeroize::Zeroize;

use sealstream_common::SecretBytes;
use sealstream_crypto::{Crypter, CrypterConfig, KdfAlgorithm, KeySize};

#[derive(Parser)]
#[command(name = "sealstream")]
#[command(about = "Password-based authenticated encryption for streams and files")]
#[command(version)]
struct Cli {
    /// Decrypt instead of encrypt.
    #[arg(short, long)]
    decrypt: bool,

    /// Stretch the passphrase with the memory-hard KDF (Argon2id)
    /// instead of PBKDF2. Decryption follows the stream header and
    /// ignores this flag.
    #[arg(long)]
    memory_hard: bool,

    /// AES key size in bits: 128, 192, or 256. Decryption must use
    /// the same size the stream was encrypted with.
    #[arg(long, default_value_t = 256)]
    key_size: u16,

    /// Read the passphrase from the first line of this file instead
    /// of prompting.
    #[arg(long)]
    passfile: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Input file (default: stdin).
    infile: Option<PathBuf>,

    /// Output file (default: stdout).
    outfile: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging. Stdout may carry stream data, so logs go to
    // stderr and stay quiet unless -v is given.
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let key_size = match cli.key_size {
        128 => KeySize::Aes128,
        192 => KeySize::Aes192,
        256 => KeySize::Aes256,
        _ => anyhow::bail!("Invalid key size. Use: 128, 192, or 256"),
    };

    let kdf = if cli.memory_hard {
        KdfAlgorithm::MemoryHard
    } else {
        KdfAlgorithm::Fast
    };

    let config = CrypterConfig {
        key_size,
        kdf,
        ..CrypterConfig::default()
    };

    let password = read_passphrase(cli.passfile.as_deref(), !cli.decrypt)?;
    let mut crypter = Crypter::new(password, config).context("Invalid configuration")?;

    let result = run(
        &crypter,
        cli.decrypt,
        cli.infile.as_deref(),
        cli.outfile.as_deref(),
    );
    crypter.reset();
    result
}

/// Read the passphrase, prompting twice when encrypting so a typo
/// does not seal data under an unknown key.
fn read_passphrase(passfile: Option<&Path>, confirm: bool) -> Result<SecretBytes> {
    if let Some(path) = passfile {
        let mut contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read passphrase file {}", path.display()))?;
        let line = contents.lines().next().unwrap_or("").to_string();
        contents.zeroize();
        return Ok(SecretBytes::from(line));
    }

    let password =
        rpassword::prompt_password("Enter passphrase: ").context("Failed to read passphrase")?;
    if password.is_empty() {
        anyhow::bail!("Passphrase cannot be empty");
    }

    if confirm {
        let mut again = rpassword::prompt_password("Confirm passphrase: ")
            .context("Failed to read passphrase")?;
        let matched = password == again;
        again.zeroize();
        if !matched {
            anyhow::bail!("Passphrases do not match");
        }
    }

    Ok(SecretBytes::from(password))
}

fn run(
    crypter: &Crypter,
    decrypt: bool,
    infile: Option<&Path>,
    outfile: Option<&Path>,
) -> Result<()> {
    debug!(
        "{} with AES-{}",
        if decrypt { "Decrypting" } else { "Encrypting" },
        crypter.config().key_size.bytes() * 8
    );

    let mut source: Box<dyn Read> = match infile {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let bytes = match outfile {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            let bytes = transfer(crypter, decrypt, &mut source, &mut sink)?;
            let file = sink
                .into_inner()
                .map_err(|e| e.into_error())
                .context("Failed to flush output")?;
            file.sync_all().context("Failed to sync output")?;
            bytes
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            let bytes = transfer(crypter, decrypt, &mut source, &mut sink)?;
            sink.flush().context("Failed to flush output")?;
            bytes
        }
    };

    debug!("Processed {} bytes", bytes);
    Ok(())
}

fn transfer<W: Write>(
    crypter: &Crypter,
    decrypt: bool,
    source: &mut dyn Read,
    sink: &mut W,
) -> Result<u64> {
    if decrypt {
        crypter.decrypt(source, sink).context("Decryption failed")
    } else {
        crypter.encrypt(source, sink).context("Encryption failed")
    }
}
