//! From-scratch AES-128 following FIPS-197.
//!
//! The crate is layered bottom-up:
//! - GF(2^8) arithmetic and compile-time S-box/Rcon tables.
//! - The column-major [`State`] codec and the four round transforms.
//! - Key schedule and single-block encryption/decryption.
//! - Length-byte padding and the multi-block [`Aes128Ecb`] message cipher.
//!
//! Messages are processed one block at a time with no chaining (ECB). That
//! contract is fixed: identical plaintext blocks encrypt identically. Do not
//! use this for anything that needs confidentiality of structured data.
//!
//! Key bytes of the wrong length are never adjusted implicitly. [`encrypt`]
//! and [`decrypt`] reject them; callers who want the pad-or-truncate
//! behaviour ask for it with [`Aes128Key::normalize`].
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod ecb;
mod error;
mod gf;
mod key;
mod padding;
mod round;
mod sbox;
mod schedule;
mod state;
mod trace;

pub use crate::block::{Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::ecb::{Aes128Ecb, EcbConfig};
pub use crate::error::{Error, Result};
pub use crate::gf::{gf_mul, xtime};
pub use crate::key::{
    Aes128Key, KeyNormalization, KeyPolicy, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT,
};
pub use crate::padding::{pad, unpad};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_mix_single_column, inv_shift_rows, inv_sub_bytes,
    mix_columns, mix_single_column, shift_rows, sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, RCON};
pub use crate::schedule::{expand_key, expand_key_words, SCHEDULE_WORDS};
pub use crate::state::State;
pub use crate::trace::{trace_decrypt, trace_encrypt, Step, Trace, TraceStep};

/// Encrypts `plaintext` under a 16-byte `key`.
///
/// Fails with [`Error::InvalidKeyLength`] for any other key length.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let key = Aes128Key::try_from(key)?;
    Ok(Aes128Ecb::new(&key).encrypt(plaintext))
}

/// Decrypts `ciphertext` under a 16-byte `key` and strips the padding.
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let key = Aes128Key::try_from(key)?;
    Aes128Ecb::new(&key).decrypt(ciphertext)
}
