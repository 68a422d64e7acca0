//! Multi-block message processing.
//!
//! Every 16-byte block is transformed independently under the same round
//! keys: there is no IV and no chaining, so equal plaintext blocks produce
//! equal ciphertext blocks. This is the ECB construction and leaks message
//! structure; it is kept because the output format depends on it.
//!
//! Since blocks do not depend on one another, a message can be split across
//! worker threads that share the read-only [`RoundKeys`].

use std::num::NonZeroUsize;
use std::thread;

use log::debug;

use crate::block::{load, Block, BLOCK_SIZE};
use crate::cipher::{decrypt_block, encrypt_block};
use crate::error::{Error, Result};
use crate::key::{Aes128Key, RoundKeys};
use crate::padding::{pad, unpadded_len};
use crate::schedule::expand_key;

/// Execution settings for message processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcbConfig {
    /// Worker threads. `1` runs inline, `0` uses the available parallelism.
    pub threads: usize,
}

impl Default for EcbConfig {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

impl EcbConfig {
    fn resolved_threads(&self) -> usize {
        match self.threads {
            0 => thread::available_parallelism().map_or(1, NonZeroUsize::get),
            n => n,
        }
    }
}

/// AES-128 message cipher holding a key schedule computed once per key.
#[derive(Clone, Debug)]
pub struct Aes128Ecb {
    round_keys: RoundKeys,
    config: EcbConfig,
}

impl Aes128Ecb {
    /// Expands `key` and uses the default (sequential) configuration.
    pub fn new(key: &Aes128Key) -> Self {
        Self::with_config(key, EcbConfig::default())
    }

    /// Expands `key` with an explicit configuration.
    pub fn with_config(key: &Aes128Key, config: EcbConfig) -> Self {
        Self {
            round_keys: expand_key(key),
            config,
        }
    }

    /// The expanded round keys.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut EcbConfig {
        &mut self.config
    }

    /// Pads and encrypts an arbitrary-length message.
    ///
    /// The result is always a non-empty multiple of 16 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let mut data = pad(plaintext);
        debug!(
            "encrypting {} bytes as {} blocks",
            plaintext.len(),
            data.len() / BLOCK_SIZE
        );
        self.apply(&mut data, encrypt_block);
        data
    }

    /// Decrypts a message and strips its padding.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        check_block_length(ciphertext.len())?;
        debug!("decrypting {} blocks", ciphertext.len() / BLOCK_SIZE);
        let mut data = ciphertext.to_vec();
        self.apply(&mut data, decrypt_block);
        let len = unpadded_len(&data)?;
        data.truncate(len);
        Ok(data)
    }

    /// Encrypts block-aligned data in place without padding.
    pub fn encrypt_blocks(&self, data: &mut [u8]) -> Result<()> {
        check_block_length(data.len())?;
        self.apply(data, encrypt_block);
        Ok(())
    }

    /// Decrypts block-aligned data in place without removing padding.
    pub fn decrypt_blocks(&self, data: &mut [u8]) -> Result<()> {
        check_block_length(data.len())?;
        self.apply(data, decrypt_block);
        Ok(())
    }

    fn apply(&self, data: &mut [u8], op: fn(&Block, &RoundKeys) -> Block) {
        let blocks = data.len() / BLOCK_SIZE;
        let workers = self.config.resolved_threads().min(blocks).max(1);
        let round_keys = &self.round_keys;

        if workers == 1 {
            apply_blocks(data, round_keys, op);
            return;
        }

        let span = blocks.div_ceil(workers) * BLOCK_SIZE;
        debug!("splitting {blocks} blocks across {workers} workers");
        thread::scope(|scope| {
            for part in data.chunks_mut(span) {
                scope.spawn(move || apply_blocks(part, round_keys, op));
            }
        });
    }
}

fn apply_blocks(data: &mut [u8], round_keys: &RoundKeys, op: fn(&Block, &RoundKeys) -> Block) {
    for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
        let out = op(&load(chunk), round_keys);
        chunk.copy_from_slice(&out);
    }
}

fn check_block_length(len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockLength { len });
    }
    Ok(())
}
