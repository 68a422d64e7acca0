//! AES-128 key schedule.

use log::debug;

use crate::key::{Aes128Key, RoundKeys, KEY_SIZE, ROUND_KEY_COUNT};
use crate::sbox::{sbox, RCON};
use crate::state::State;

/// Number of 32-bit words in the expanded AES-128 schedule.
pub const SCHEDULE_WORDS: usize = 4 * ROUND_KEY_COUNT;

const KEY_WORDS: usize = KEY_SIZE / 4;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a key into the 44 big-endian schedule words `w[0..44]`.
pub fn expand_key_words(key: &Aes128Key) -> [u32; SCHEDULE_WORDS] {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in KEY_WORDS..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % KEY_WORDS == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / KEY_WORDS - 1]) << 24);
        }
        w[i] = w[i - KEY_WORDS] ^ temp;
    }
    w
}

/// Expands a 128-bit key into 11 round keys.
///
/// Round key `r` holds words `w[4r..4r+4]`, one word per state column.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let w = expand_key_words(key);

    let mut round_keys = [State::default(); ROUND_KEY_COUNT];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (col, word) in words.iter().enumerate() {
            round_key.set_column(col, word.to_be_bytes());
        }
    }

    debug!("expanded AES-128 key into {ROUND_KEY_COUNT} round keys");
    RoundKeys::new(round_keys)
}
