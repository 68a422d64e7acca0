//! Length-byte padding: `L` bytes of value `L`, with `1 <= L <= 16`.

use crate::block::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Pads `message` to a multiple of the block size.
///
/// Always appends at least one byte, so an aligned message gains a full
/// block of `0x10`.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - message.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(message.len() + pad_len);
    padded.extend_from_slice(message);
    padded.resize(message.len() + pad_len, pad_len as u8);
    padded
}

/// Returns the unpadded length of `padded`, validating every padding byte.
pub fn unpadded_len(padded: &[u8]) -> Result<usize> {
    let pad_len = *padded.last().ok_or(Error::InvalidPadding)? as usize;
    if pad_len == 0 || pad_len > BLOCK_SIZE || pad_len > padded.len() {
        return Err(Error::InvalidPadding);
    }
    let body_len = padded.len() - pad_len;
    if padded[body_len..].iter().any(|&b| b as usize != pad_len) {
        return Err(Error::InvalidPadding);
    }
    Ok(body_len)
}

/// Strips and validates padding, returning the original message.
pub fn unpad(padded: &[u8]) -> Result<&[u8]> {
    let len = unpadded_len(padded)?;
    Ok(&padded[..len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_partial_block() {
        let padded = pad(b"YELLOW SUBMARINE!");
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[17..], &[15u8; 15]);
    }

    #[test]
    fn aligned_message_gains_full_block() {
        let message = [0xabu8; 32];
        let padded = pad(&message);
        assert_eq!(padded.len(), 48);
        assert_eq!(&padded[..32], &message);
        assert_eq!(&padded[32..], &[0x10u8; 16]);
    }

    #[test]
    fn empty_message_becomes_one_block() {
        assert_eq!(pad(&[]), vec![0x10u8; 16]);
        assert_eq!(unpad(&[0x10u8; 16]).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn unpad_inverts_pad_for_every_length() {
        for len in 0..=48 {
            let message: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let padded = pad(&message);
            assert_eq!(padded.len() % BLOCK_SIZE, 0);
            assert!(padded.len() > message.len());
            assert_eq!(unpad(&padded).unwrap(), &message[..]);
        }
    }

    #[test]
    fn out_of_range_length_byte_is_rejected() {
        let mut padded = pad(b"hello");
        for bad in [0u8, 17, 0x80, 0xff] {
            *padded.last_mut().unwrap() = bad;
            assert_eq!(unpad(&padded), Err(Error::InvalidPadding));
        }
    }

    #[test]
    fn inconsistent_padding_bytes_are_rejected() {
        let mut padded = pad(b"hello");
        padded[12] ^= 0x01;
        assert_eq!(unpad(&padded), Err(Error::InvalidPadding));
    }

    #[test]
    fn length_byte_longer_than_input_is_rejected() {
        assert_eq!(unpad(&[4, 4, 4]), Err(Error::InvalidPadding));
        assert_eq!(unpad(&[]), Err(Error::InvalidPadding));
    }
}
