//! Substitution tables and key-schedule round constants.
//!
//! All three tables are derived by const evaluation from the field arithmetic
//! in [`crate::gf`], so they are fixed at compile time and never mutable.

use crate::gf::{gf_inv, xtime};

const AFFINE_CONSTANT: u8 = 0x63;

const FORWARD: [u8; 256] = build_sbox();

/// Forward S-box: field inverse followed by the FIPS-197 affine map.
static SBOX: [u8; 256] = FORWARD;

/// Inverse S-box, the permutation inverse of [`SBOX`].
static INV_SBOX: [u8; 256] = build_inv_sbox(&FORWARD);

/// Round constants for AES-128 key expansion: successive doublings of `0x01`.
pub const RCON: [u8; 10] = build_rcon();

const fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ AFFINE_CONSTANT
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = affine(gf_inv(x as u8));
        x += 1;
    }
    table
}

const fn build_inv_sbox(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[forward[x] as usize] = x as u8;
        x += 1;
    }
    table
}

const fn build_rcon() -> [u8; 10] {
    let mut rcon = [0u8; 10];
    rcon[0] = 0x01;
    let mut i = 1;
    while i < 10 {
        rcon[i] = xtime(rcon[i - 1]);
        i += 1;
    }
    rcon
}

/// Looks up `byte` in the forward S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Looks up `byte` in the inverse S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xff), 0x16);
        assert_eq!(inv_sbox(0x00), 0x52);
        assert_eq!(inv_sbox(0x63), 0x00);
    }

    #[test]
    fn inverse_table_undoes_forward_table() {
        for x in 0..=255u8 {
            assert_eq!(inv_sbox(sbox(x)), x);
            assert_eq!(sbox(inv_sbox(x)), x);
        }
    }

    #[test]
    fn sbox_has_no_fixed_points() {
        for x in 0..=255u8 {
            assert_ne!(sbox(x), x);
        }
    }

    #[test]
    fn rcon_sequence() {
        assert_eq!(
            RCON,
            [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36]
        );
    }
}
