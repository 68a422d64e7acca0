//! Command-line interface for `aes128-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use aes128_core::{
    decrypt_block, encrypt_block, expand_key, expand_key_words, trace_decrypt, trace_encrypt,
    Aes128Ecb, Aes128Key, Block, EcbConfig, KeyPolicy, RoundKeys,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "aes128",
    version,
    author,
    about = "From-scratch AES-128 (independent blocks, length-byte padding)"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Key material and how to treat lengths other than 16 bytes.
#[derive(Args)]
struct KeyArgs {
    /// Key as hex characters.
    #[arg(
        long,
        value_name = "HEX",
        conflicts_with = "key_text",
        required_unless_present = "key_text"
    )]
    key_hex: Option<String>,
    /// Key as UTF-8 text.
    #[arg(long, value_name = "TEXT")]
    key_text: Option<String>,
    /// What to do with keys that are not exactly 16 bytes.
    #[arg(long, value_enum, default_value_t = PolicyArg::Strict)]
    key_policy: PolicyArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Reject keys that are not 16 bytes.
    Strict,
    /// Zero-pad short keys and truncate long ones.
    ZeroPad,
}

impl From<PolicyArg> for KeyPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Strict => KeyPolicy::Strict,
            PolicyArg::ZeroPad => KeyPolicy::ZeroPadOrTruncate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Pad and encrypt a file.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        /// Plaintext input path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Ciphertext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Worker threads (0 = available parallelism).
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
    /// Decrypt a file and strip its padding.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        /// Ciphertext input path (a positive multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Plaintext output path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Worker threads (0 = available parallelism).
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
    /// Verify the FIPS-197 vectors and random round trips.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the key schedule and every intermediate state for one block.
    Trace {
        #[command(flatten)]
        key: KeyArgs,
        /// The 16-byte block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Trace decryption instead of encryption.
        #[arg(long, default_value_t = false)]
        decrypt: bool,
    },
    /// Encrypt and decrypt a random message with a random key.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Message length in bytes.
        #[arg(long, default_value_t = 40)]
        len: usize,
    },
}

const FIPS_VECTORS: [(&str, &str, &str); 2] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc {
            key,
            input,
            output,
            threads,
        } => cmd_enc(&key, &input, &output, threads),
        Commands::Dec {
            key,
            input,
            output,
            threads,
        } => cmd_dec(&key, &input, &output, threads),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Trace {
            key,
            block_hex,
            decrypt,
        } => cmd_trace(&key, &block_hex, decrypt),
        Commands::Demo { seed, len } => cmd_demo(seed, len),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn cmd_enc(
    key: &KeyArgs,
    input_path: &PathBuf,
    output_path: &PathBuf,
    threads: usize,
) -> Result<()> {
    let cipher = Aes128Ecb::with_config(&resolve_key(key)?, EcbConfig { threads });
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = cipher.encrypt(&data);
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!("encrypted {} bytes into {} bytes", data.len(), ciphertext.len());
    Ok(())
}

fn cmd_dec(
    key: &KeyArgs,
    input_path: &PathBuf,
    output_path: &PathBuf,
    threads: usize,
) -> Result<()> {
    let cipher = Aes128Ecb::with_config(&resolve_key(key)?, EcbConfig { threads });
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let plaintext = cipher
        .decrypt(&data)
        .with_context(|| format!("decrypt {}", input_path.display()))?;
    fs::write(output_path, &plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!("decrypted {} bytes into {} bytes", data.len(), plaintext.len());
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in FIPS_VECTORS {
        let round_keys = expand_key(&parse_key_hex(key_hex)?);
        let plain = parse_block_hex(plain_hex)?;
        let expected = parse_block_hex(cipher_hex)?;
        if encrypt_block(&plain, &round_keys) != expected {
            bail!("encryption mismatch for FIPS-197 vector with key {key_hex}");
        }
        if decrypt_block(&expected, &round_keys) != plain {
            bail!("decryption mismatch for FIPS-197 vector with key {key_hex}");
        }
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        let cipher = Aes128Ecb::new(&Aes128Key::from(key_bytes));

        let len = (rng.next_u32() % 256) as usize;
        let mut message = vec![0u8; len];
        rng.fill_bytes(&mut message);

        let ciphertext = cipher.encrypt(&message);
        if cipher.decrypt(&ciphertext)? != message {
            bail!("round trip failed for a {len}-byte message");
        }
    }
    println!(
        "ok: {} FIPS-197 vectors, {samples} random round trips",
        FIPS_VECTORS.len()
    );
    Ok(())
}

fn cmd_trace(key: &KeyArgs, block_hex: &str, decrypt: bool) -> Result<()> {
    let key = resolve_key(key)?;
    let block = parse_block_hex(block_hex)?;
    let round_keys = expand_key(&key);

    println!("key: {}", hex::encode(key.as_bytes()));
    for (i, word) in expand_key_words(&key).iter().enumerate() {
        println!("w[{i:2}] = {word:08x}");
    }
    print_round_keys(&round_keys);

    let trace = if decrypt {
        trace_decrypt(&block, &round_keys)
    } else {
        trace_encrypt(&block, &round_keys)
    };
    for step in &trace.steps {
        println!("\nround {:2} {}", step.round, step.step);
        println!("{}", step.state);
    }
    println!("\noutput: {}", hex::encode(trace.output));
    Ok(())
}

fn cmd_demo(seed: Option<u64>, len: usize) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Aes128Ecb::new(&Aes128Key::from(key_bytes));

    let mut message = vec![0u8; len];
    rng.fill_bytes(&mut message);

    let ciphertext = cipher.encrypt(&message);
    let decrypted = cipher.decrypt(&ciphertext)?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(&message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn print_round_keys(round_keys: &RoundKeys) {
    for (i, rk) in round_keys.iter().enumerate() {
        println!("round key {i:2}: {}", hex::encode(rk.to_block()));
    }
}

fn resolve_key(args: &KeyArgs) -> Result<Aes128Key> {
    let bytes = match (&args.key_hex, &args.key_text) {
        (Some(hex_str), _) => hex::decode(hex_str.trim()).context("decode key hex")?,
        (None, Some(text)) => text.as_bytes().to_vec(),
        (None, None) => bail!("either --key-hex or --key-text is required"),
    };
    let (key, _) = Aes128Key::normalize(&bytes, args.key_policy.into())
        .context("AES-128 key must be 16 bytes (pass --key-policy zero-pad to pad or truncate)")?;
    Ok(key)
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Ok(Aes128Key::try_from(bytes.as_slice())?)
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    if bytes.len() != 16 {
        bail!("block must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
