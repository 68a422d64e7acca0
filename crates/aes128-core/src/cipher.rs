//! AES-128 block encryption and decryption.

use crate::block::Block;
use crate::key::RoundKeys;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::state::State;
use crate::trace::Step;

const ROUNDS: usize = 10;

/// Runs the forward cipher, reporting the state after every transform.
pub(crate) fn encrypt_state<F>(state: &mut State, round_keys: &RoundKeys, mut observe: F)
where
    F: FnMut(usize, Step, &State),
{
    observe(0, Step::Input, state);
    add_round_key(state, round_keys.get(0));
    observe(0, Step::AddRoundKey, state);

    for round in 1..=ROUNDS {
        sub_bytes(state);
        observe(round, Step::SubBytes, state);
        shift_rows(state);
        observe(round, Step::ShiftRows, state);
        if round < ROUNDS {
            mix_columns(state);
            observe(round, Step::MixColumns, state);
        }
        add_round_key(state, round_keys.get(round));
        observe(round, Step::AddRoundKey, state);
    }
}

/// Runs the inverse cipher. `round` in each report is the round key index used.
pub(crate) fn decrypt_state<F>(state: &mut State, round_keys: &RoundKeys, mut observe: F)
where
    F: FnMut(usize, Step, &State),
{
    observe(ROUNDS, Step::Input, state);
    add_round_key(state, round_keys.get(ROUNDS));
    observe(ROUNDS, Step::AddRoundKey, state);

    for round in (0..ROUNDS).rev() {
        inv_shift_rows(state);
        observe(round, Step::InvShiftRows, state);
        inv_sub_bytes(state);
        observe(round, Step::InvSubBytes, state);
        add_round_key(state, round_keys.get(round));
        observe(round, Step::AddRoundKey, state);
        if round > 0 {
            inv_mix_columns(state);
            observe(round, Step::InvMixColumns, state);
        }
    }
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    encrypt_state(&mut state, round_keys, |_, _, _| {});
    state.to_block()
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = State::from_block(block);
    decrypt_state(&mut state, round_keys, |_, _, _| {});
    state.to_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Aes128Key;
    use crate::schedule::expand_key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let ct = encrypt_block(&NIST_PLAIN, &round_keys);
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        let pt = decrypt_block(&NIST_CIPHER, &round_keys);
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn encrypt_matches_fips_appendix_b() {
        let key = Aes128Key::from([
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ]);
        let plain = [
            0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37,
            0x07, 0x34,
        ];
        let expected = [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32,
        ];
        let rks = expand_key(&key);
        assert_eq!(encrypt_block(&plain, &rks), expected);
        assert_eq!(decrypt_block(&expected, &rks), plain);
    }

    #[test]
    fn observer_sees_every_transform() {
        let rks = expand_key(&Aes128Key::from(NIST_KEY));
        let mut state = State::from_block(&NIST_PLAIN);
        let mut count = 0;
        encrypt_state(&mut state, &rks, |_, _, _| count += 1);
        // input + initial key + 9 full rounds of 4 + final round of 3
        assert_eq!(count, 2 + 9 * 4 + 3);

        let mut count = 0;
        decrypt_state(&mut state, &rks, |_, _, _| count += 1);
        assert_eq!(count, 2 + 9 * 4 + 3);
        assert_eq!(state.to_block(), NIST_PLAIN);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let rks = expand_key(&key);
            let ct = encrypt_block(&block, &rks);
            let pt = decrypt_block(&ct, &rks);
            assert_eq!(pt, block);
        }
    }
}
