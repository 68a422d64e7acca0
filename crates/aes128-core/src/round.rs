//! AES round transformations.

use crate::gf::{gf_mul, xtime};
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    for byte in state.0.iter_mut().flatten() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r`.
#[inline]
pub fn shift_rows(state: &mut State) {
    for (r, row) in state.0.iter_mut().enumerate().skip(1) {
        row.rotate_left(r);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for (r, row) in state.0.iter_mut().enumerate().skip(1) {
        row.rotate_right(r);
    }
}

/// Mixes one column with the circulant matrix `[2 3 1 1]`.
pub fn mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        xtime(a0) ^ (xtime(a1) ^ a1) ^ a2 ^ a3,
        a0 ^ xtime(a1) ^ (xtime(a2) ^ a2) ^ a3,
        a0 ^ a1 ^ xtime(a2) ^ (xtime(a3) ^ a3),
        (xtime(a0) ^ a0) ^ a1 ^ a2 ^ xtime(a3),
    ]
}

/// Mixes one column with the inverse circulant matrix `[14 11 13 9]`.
pub fn inv_mix_single_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        gf_mul(a0, 0x0e) ^ gf_mul(a1, 0x0b) ^ gf_mul(a2, 0x0d) ^ gf_mul(a3, 0x09),
        gf_mul(a0, 0x09) ^ gf_mul(a1, 0x0e) ^ gf_mul(a2, 0x0b) ^ gf_mul(a3, 0x0d),
        gf_mul(a0, 0x0d) ^ gf_mul(a1, 0x09) ^ gf_mul(a2, 0x0e) ^ gf_mul(a3, 0x0b),
        gf_mul(a0, 0x0b) ^ gf_mul(a1, 0x0d) ^ gf_mul(a2, 0x09) ^ gf_mul(a3, 0x0e),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for c in 0..4 {
        let mixed = mix_single_column(state.column(c));
        state.set_column(c, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for c in 0..4 {
        let mixed = inv_mix_single_column(state.column(c));
        state.set_column(c, mixed);
    }
}

/// Adds (XORs) a round key into the state. Self-inverse.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &State) {
    for (dst, src) in state.0.iter_mut().flatten().zip(round_key.0.iter().flatten()) {
        *dst ^= *src;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use rand::{Rng, RngCore};

    fn random_state(rng: &mut impl RngCore) -> State {
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        State::from_block(&block)
    }

    #[test]
    fn shift_rows_moves_bytes_like_fips() {
        let block: Block = core::array::from_fn(|i| i as u8);
        let mut state = State::from_block(&block);
        shift_rows(&mut state);
        assert_eq!(
            state.to_block(),
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
        assert_eq!(state.row(0), [0, 4, 8, 12]);
        inv_shift_rows(&mut state);
        assert_eq!(state.to_block(), block);
    }

    #[test]
    fn mix_single_column_known_vectors() {
        assert_eq!(
            mix_single_column([0xdb, 0x13, 0x53, 0x45]),
            [0x8e, 0x4d, 0xa1, 0xbc]
        );
        assert_eq!(
            mix_single_column([0xf2, 0x0a, 0x22, 0x5c]),
            [0x9f, 0xdc, 0x58, 0x9d]
        );
        assert_eq!(mix_single_column([0x01; 4]), [0x01; 4]);
        assert_eq!(mix_single_column([0xc6; 4]), [0xc6; 4]);
        assert_eq!(
            mix_single_column([0xd4, 0xd4, 0xd4, 0xd5]),
            [0xd5, 0xd5, 0xd7, 0xd6]
        );
    }

    #[test]
    fn mix_columns_matches_explicit_gf_formula() {
        let mut rng = rand::thread_rng();
        for _ in 0..256 {
            let col: [u8; 4] = rng.gen();
            let [a, b, c, d] = col;
            let expected = [
                gf_mul(a, 2) ^ gf_mul(b, 3) ^ c ^ d,
                a ^ gf_mul(b, 2) ^ gf_mul(c, 3) ^ d,
                a ^ b ^ gf_mul(c, 2) ^ gf_mul(d, 3),
                gf_mul(a, 3) ^ b ^ c ^ gf_mul(d, 2),
            ];
            assert_eq!(mix_single_column(col), expected);
        }
    }

    #[test]
    fn inv_mix_column_undoes_mix_column() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let col: [u8; 4] = rng.gen();
            assert_eq!(inv_mix_single_column(mix_single_column(col)), col);
            assert_eq!(mix_single_column(inv_mix_single_column(col)), col);
        }
    }

    #[test]
    fn transforms_invert_over_random_states() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let original = random_state(&mut rng);
            let key = random_state(&mut rng);

            let mut state = original;
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            add_round_key(&mut state, &key);
            add_round_key(&mut state, &key);
            assert_eq!(state, original);
        }
    }

    #[test]
    fn sub_bytes_substitutes_every_cell() {
        let mut state = State::default();
        sub_bytes(&mut state);
        assert_eq!(state.to_block(), [0x63; 16]);
    }
}
