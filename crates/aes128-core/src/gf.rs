//! GF(2^8) arithmetic under the AES reducing polynomial x^8 + x^4 + x^3 + x + 1.

const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x` (i.e. `0x02`) in GF(2^8).
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies two field elements with the shift-and-add method.
///
/// Total over all `(a, b)` pairs. Usable in const context so the
/// substitution tables can be derived at compile time.
pub const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        let hi_bit_set = a & 0x80;
        a <<= 1;
        if hi_bit_set != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
        i += 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Maps `0` to `0`.
pub(crate) const fn gf_inv(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u32;
    while exp > 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    if a == 0 {
        0
    } else {
        result
    }
}
