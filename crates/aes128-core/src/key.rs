//! Key types for AES-128 and the key normalization policy.

use log::warn;

use crate::error::{Error, Result};
use crate::state::State;

/// Length of an AES-128 key in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEY_COUNT: usize = 11;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; KEY_SIZE]);

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for Aes128Key {
    type Error = Error;

    /// Accepts exactly 16 bytes; anything else is [`Error::InvalidKeyLength`].
    fn try_from(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(key))
    }
}

/// How caller-supplied key material of the wrong length is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Reject anything that is not exactly 16 bytes.
    #[default]
    Strict,
    /// Right-pad short keys with zero bytes, truncate long keys to 16 bytes.
    ZeroPadOrTruncate,
}

/// What a [`KeyPolicy`] did to the supplied key material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyNormalization {
    /// Key was already 16 bytes and is used unchanged.
    Exact,
    /// Key was short; this many zero bytes were appended.
    ZeroPadded {
        /// Number of `0x00` bytes appended.
        added: usize,
    },
    /// Key was long; this many trailing bytes were discarded.
    Truncated {
        /// Number of bytes dropped from the end.
        dropped: usize,
    },
}

impl KeyNormalization {
    /// Returns `true` when the key bytes were altered.
    pub fn is_modified(&self) -> bool {
        !matches!(self, Self::Exact)
    }
}

impl Aes128Key {
    /// Builds a key from arbitrary-length bytes under an explicit policy.
    ///
    /// The returned [`KeyNormalization`] tells the caller whether the bytes
    /// were padded or truncated, so the change is never silent.
    pub fn normalize(bytes: &[u8], policy: KeyPolicy) -> Result<(Self, KeyNormalization)> {
        let normalization = match bytes.len() {
            KEY_SIZE => KeyNormalization::Exact,
            len if len < KEY_SIZE => KeyNormalization::ZeroPadded {
                added: KEY_SIZE - len,
            },
            len => KeyNormalization::Truncated {
                dropped: len - KEY_SIZE,
            },
        };

        if policy == KeyPolicy::Strict && normalization.is_modified() {
            return Err(Error::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }

        let mut key = [0u8; KEY_SIZE];
        let take = bytes.len().min(KEY_SIZE);
        key[..take].copy_from_slice(&bytes[..take]);

        if normalization.is_modified() {
            warn!(
                "key of {} bytes normalized to {KEY_SIZE}: {normalization:?}",
                bytes.len()
            );
        }
        Ok((Self(key), normalization))
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

/// Expanded round keys for AES-128. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys([State; ROUND_KEY_COUNT]);

impl RoundKeys {
    pub(crate) fn new(keys: [State; ROUND_KEY_COUNT]) -> Self {
        Self(keys)
    }

    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &State {
        &self.0[round]
    }

    /// Iterates the round keys in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = &State> {
        self.0.iter()
    }

    /// Serializes all round keys as 176 bytes, round 0 first.
    pub fn to_bytes(&self) -> [u8; 16 * ROUND_KEY_COUNT] {
        let mut out = [0u8; 16 * ROUND_KEY_COUNT];
        for (chunk, key) in out.chunks_exact_mut(16).zip(self.0.iter()) {
            chunk.copy_from_slice(&key.to_block());
        }
        out
    }
}
